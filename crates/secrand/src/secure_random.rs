// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_core::{TryCryptoRng, TryRngCore};

use crate::error::SecureRandomError;
use crate::system::{StrongEntropySource, SystemEntropySource};
use crate::traits::EntropySource;

/// Cryptographically secure random bytes from the operating system.
///
/// Validates requests and short-circuits empty ones before any source is
/// touched; everything else goes to the wrapped [`EntropySource`] and its
/// failures come back unchanged.
pub struct SecureRandom<E = SystemEntropySource> {
    source: E,
}

impl SecureRandom {
    /// Creates a generator backed by the process-wide [`SystemEntropySource`].
    pub const fn new() -> Self {
        Self::with_source(SystemEntropySource {})
    }

    /// Returns a generator suitable for long-term private key generation.
    ///
    /// # Errors
    ///
    /// Returns [`SecureRandomError::AlgorithmUnavailable`] where no strong
    /// facility exists on this platform.
    pub fn instance_strong() -> Result<SecureRandom<StrongEntropySource>, SecureRandomError> {
        StrongEntropySource::new().map(SecureRandom::with_source)
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SecureRandom<E> {
    /// Creates a generator backed by `source`.
    pub const fn with_source(source: E) -> Self {
        Self { source }
    }

    /// The wrapped source.
    pub fn source(&self) -> &E {
        &self.source
    }
}

impl<E: EntropySource> SecureRandom<E> {
    /// Returns `count` freshly generated random bytes.
    ///
    /// # Errors
    ///
    /// - [`SecureRandomError::InvalidArgument`] if `count` is negative or
    ///   cannot be allocated; no source is touched.
    /// - Any failure of the underlying source.
    pub fn next_bytes_of(&self, count: i64) -> Result<Vec<u8>, SecureRandomError> {
        let invalid = SecureRandomError::InvalidArgument(count);
        let len = usize::try_from(count).map_err(|_| invalid.clone())?;

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).map_err(|_| invalid)?;
        bytes.resize(len, 0u8);
        self.next_bytes_copy_to(Some(&mut bytes[..]))?;

        Ok(bytes)
    }

    /// Fills `bytes` with random data. Does nothing if `bytes` is `None` or empty.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying source. `bytes` must then be treated as
    /// garbage.
    pub fn next_bytes_copy_to(&self, bytes: Option<&mut [u8]>) -> Result<(), SecureRandomError> {
        match bytes {
            Some(bytes) if !bytes.is_empty() => self.source.fill_bytes(bytes),
            _ => Ok(()),
        }
    }
}

impl<E: EntropySource> EntropySource for SecureRandom<E> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        self.next_bytes_copy_to(Some(dest))
    }
}

impl<E: EntropySource> TryRngCore for SecureRandom<E> {
    type Error = SecureRandomError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut buf = [0u8; 4];
        self.next_bytes_copy_to(Some(&mut buf[..]))?;

        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut buf = [0u8; 8];
        self.next_bytes_copy_to(Some(&mut buf[..]))?;

        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.next_bytes_copy_to(Some(dst))
    }
}

impl<E: EntropySource> TryCryptoRng for SecureRandom<E> {}
