// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::OnceLock;

use crate::error::SecureRandomError;
use crate::traits::{CapabilityProbe, EntropySource};

/// Which source an [`Orchestrator`] settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The probed, preferred source.
    Primary,
    /// The probe said no; the fallback serves every request.
    Fallback,
    /// The probe said no and there is no fallback.
    Unavailable,
}

/// Selects between a probed primary source and an optional fallback.
///
/// The route is chosen on the first fill from the probe's cached answer and
/// never changes afterwards. Failures from the chosen source are returned
/// unchanged; nothing is retried here.
pub struct Orchestrator<P, A, B> {
    probe: P,
    primary: A,
    fallback: Option<B>,
    route: OnceLock<Route>,
}

impl<P, A, B> Orchestrator<P, A, B> {
    /// Creates an orchestrator. `fallback: None` makes an unavailable primary fatal.
    pub const fn new(probe: P, primary: A, fallback: Option<B>) -> Self {
        Self {
            probe,
            primary,
            fallback,
            route: OnceLock::new(),
        }
    }

    /// The probe consulted on first use.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// The preferred source.
    pub fn primary(&self) -> &A {
        &self.primary
    }

    /// The fallback source, if configured.
    pub fn fallback(&self) -> Option<&B> {
        self.fallback.as_ref()
    }
}

impl<P: CapabilityProbe, A, B> Orchestrator<P, A, B> {
    /// Returns the route, selecting it on first use.
    pub fn route(&self) -> Route {
        *self
            .route
            .get_or_init(|| select(self.probe.is_available(), self.fallback.is_some()))
    }
}

impl<P: CapabilityProbe, A: EntropySource, B: EntropySource> EntropySource
    for Orchestrator<P, A, B>
{
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        match (self.route(), &self.fallback) {
            (Route::Primary, _) => self.primary.fill_bytes(dest),
            (Route::Fallback, Some(fallback)) => fallback.fill_bytes(dest),
            _ => Err(SecureRandomError::SourceUnavailable(
                "preferred source is unavailable and no fallback is configured",
            )),
        }
    }
}

pub(crate) fn select(primary_available: bool, has_fallback: bool) -> Route {
    let route = match (primary_available, has_fallback) {
        (true, _) => Route::Primary,
        (false, true) => Route::Fallback,
        (false, false) => Route::Unavailable,
    };

    match route {
        Route::Primary => log::debug!("entropy source selected: primary"),
        Route::Fallback => log::warn!("preferred entropy source unavailable, using fallback"),
        Route::Unavailable => log::warn!("no usable entropy source on this host"),
    }

    route
}
