// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SecureRandomError;

/// A "fill this buffer or fail" entropy source.
///
/// Implementations must never return `Ok(())` having written only part of
/// `dest`.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SecureRandomError::AcquisitionFailed`] if the underlying OS call
    /// fails, or [`SecureRandomError::SourceUnavailable`] if no source can serve
    /// the request.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        (**self).fill_bytes(dest)
    }
}

/// One-time runtime check for whether the preferred OS facility is usable.
///
/// Implementations resolve at most once per process and answer every later
/// call from the cached result. Never fails: probe errors are folded into
/// the answer.
pub trait CapabilityProbe {
    /// Returns `true` if the preferred facility is present on this host.
    fn is_available(&self) -> bool;
}

impl<T: CapabilityProbe + ?Sized> CapabilityProbe for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
