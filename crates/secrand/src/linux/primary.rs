// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::c_uint;

use crate::error::SecureRandomError;
use crate::source_kind::SourceKind;
use crate::traits::EntropySource;

use super::syscall::{fill_exact, getrandom};

/// `getrandom(2)` issued directly on the destination buffer.
///
/// Callers must have confirmed availability through the capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetRandomSource {
    flags: c_uint,
}

impl GetRandomSource {
    /// Default pool, no flags. Blocks only until the pool is first seeded.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Blocking pool (`GRND_RANDOM`).
    pub const fn blocking_pool() -> Self {
        Self {
            flags: libc::GRND_RANDOM,
        }
    }
}

impl Default for GetRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for GetRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        fill_exact(dest, |buf| getrandom(buf, self.flags))
            .map_err(|err| SecureRandomError::acquisition(SourceKind::PrimarySyscall, err))
    }
}
