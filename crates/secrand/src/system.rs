// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SecureRandomError;
use crate::source_kind::SourceKind;
use crate::traits::EntropySource;

#[cfg(any(target_os = "linux", target_os = "android"))]
use crate::{
    linux::{
        DeviceSource, GETRANDOM_PROBE, GetRandomProbe, GetRandomSource, URANDOM_PATH,
        URANDOM_READINESS,
    },
    orchestrator::{Orchestrator, Route},
    traits::CapabilityProbe,
};

#[cfg(not(any(target_os = "linux", target_os = "android")))]
use crate::vendor::VendorApiSource;

#[cfg(any(target_os = "linux", target_os = "android"))]
type SystemOrchestrator = Orchestrator<&'static GetRandomProbe, GetRandomSource, DeviceSource>;

#[cfg(any(target_os = "linux", target_os = "android"))]
static SYSTEM: SystemOrchestrator = Orchestrator::new(
    &GETRANDOM_PROBE,
    GetRandomSource::new(),
    if cfg!(feature = "urandom_fallback") {
        Some(DeviceSource::new(URANDOM_PATH, &URANDOM_READINESS))
    } else {
        None
    },
);

/// Process-wide OS entropy source.
///
/// - Linux/Android: `getrandom(2)` if the kernel provides it and no policy
///   blocks it, otherwise `/dev/urandom` after `/dev/random` polled ready
/// - Everywhere else: the platform's vendor CSPRNG
///
/// The choice is made on first use and shared by every instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Returns the source serving this process, selecting it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SecureRandomError::SourceUnavailable`] if the preferred source
    /// is unavailable and the fallback is compiled out.
    pub fn source_kind(&self) -> Result<SourceKind, SecureRandomError> {
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            match SYSTEM.route() {
                Route::Primary => Ok(SourceKind::PrimarySyscall),
                Route::Fallback => Ok(SourceKind::SecondaryDevice),
                Route::Unavailable => Err(SecureRandomError::SourceUnavailable(
                    "getrandom(2) is unavailable and the /dev/urandom fallback is disabled",
                )),
            }
        }

        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        {
            Ok(SourceKind::VendorApi)
        }
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        log::trace!("system entropy request: {} bytes", dest.len());

        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            SYSTEM.fill_bytes(dest)
        }

        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        {
            VendorApiSource {}.fill_bytes(dest)
        }
    }
}

/// Entropy source suitable for long-term private key generation.
///
/// Linux/Android only: `getrandom(2)` on the blocking pool (`GRND_RANDOM`).
/// Obtained through [`crate::SecureRandom::instance_strong`].
pub struct StrongEntropySource {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    inner: GetRandomSource,
    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    _unconstructible: core::convert::Infallible,
}

impl StrongEntropySource {
    pub(crate) fn new() -> Result<Self, SecureRandomError> {
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            Self::new_with(&GETRANDOM_PROBE)
        }

        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        {
            Err(SecureRandomError::AlgorithmUnavailable(
                "no strong instance facility on this platform",
            ))
        }
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub(crate) fn new_with(probe: &dyn CapabilityProbe) -> Result<Self, SecureRandomError> {
        if probe.is_available() {
            Ok(Self {
                inner: GetRandomSource::blocking_pool(),
            })
        } else {
            Err(SecureRandomError::AlgorithmUnavailable(
                "getrandom(2) with GRND_RANDOM is unavailable",
            ))
        }
    }
}

impl EntropySource for StrongEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            self.inner.fill_bytes(dest)
        }

        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        {
            let _ = dest;
            let never: core::convert::Infallible = self._unconstructible;
            match never {}
        }
    }
}
