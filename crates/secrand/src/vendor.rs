// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::SecureRandomError;
use crate::source_kind::SourceKind;
use crate::traits::EntropySource;

/// The platform's standard CSPRNG entry point, via `getrandom`:
/// - macOS/iOS: `getentropy()` / `SecRandomCopyBytes`
/// - Windows: `ProcessPrng` / `BCryptGenRandom`
/// - WASI: `random_get`
/// - Web: `crypto.getRandomValues`
pub struct VendorApiSource {}

impl VendorApiSource {
    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), SecureRandomError> {
        if dest.is_empty() {
            return Ok(());
        }

        fill_fn(dest).map_err(|err| SecureRandomError::acquisition(SourceKind::VendorApi, err))
    }
}

impl EntropySource for VendorApiSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}
