// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::convert::Infallible;

use crate::error::OsError;
use crate::traits::CapabilityProbe;

use super::single_flight::SingleFlight;
use super::syscall::getrandom_nonblock;

/// Trial invocation of the candidate facility on a 1-byte buffer.
pub type TrialFn = fn(&mut [u8]) -> Result<usize, OsError>;

/// Cached answer of a [`GetRandomProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityState {
    /// The trial has not completed yet.
    Unknown,
    /// The facility is present.
    Available,
    /// The kernel lacks the facility or a policy blocks it.
    Unavailable,
}

/// Decides, once per process, whether `getrandom(2)` is usable.
///
/// The first caller runs a single non-blocking 1-byte trial. `ENOSYS` (no
/// kernel support) and `EPERM` (blocked by seccomp) classify the syscall as
/// unavailable; any other outcome, including unrelated errors, as available.
/// Concurrent callers wait for that answer instead of running their own trial.
pub struct GetRandomProbe {
    flight: SingleFlight,
    trial: TrialFn,
}

impl GetRandomProbe {
    /// Creates a probe backed by the real `getrandom(2)` syscall.
    pub const fn new() -> Self {
        Self::with_trial(getrandom_nonblock)
    }

    /// Creates a probe that runs `trial` instead of the real syscall.
    pub const fn with_trial(trial: TrialFn) -> Self {
        Self {
            flight: SingleFlight::new(),
            trial,
        }
    }

    /// Returns the cached state without probing.
    pub fn state(&self) -> CapabilityState {
        match self.flight.peek() {
            None => CapabilityState::Unknown,
            Some(true) => CapabilityState::Available,
            Some(false) => CapabilityState::Unavailable,
        }
    }

    fn run_trial(&self) -> bool {
        let mut buf = [0u8; 1];
        let outcome = (self.trial)(&mut buf);
        let available = classify(&outcome);

        log::debug!(
            "getrandom(2) capability probe: {} (trial outcome: {:?})",
            if available { "available" } else { "unavailable" },
            outcome.map(|_| ()),
        );

        available
    }

    #[cfg(test)]
    pub(crate) fn reset(&self) {
        self.flight.reset();
    }
}

impl Default for GetRandomProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProbe for GetRandomProbe {
    fn is_available(&self) -> bool {
        let Ok(available) = self
            .flight
            .resolve::<Infallible>(|| Ok(self.run_trial()));

        available
    }
}

/// Presence of the facility, not the success of a given call, is what counts.
pub(crate) fn classify(outcome: &Result<usize, OsError>) -> bool {
    !matches!(outcome, Err(err) if err.is_unsupported())
}
