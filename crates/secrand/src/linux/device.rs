// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs::File;
use std::io::Read;

use crate::error::{OsError, SecureRandomError};
use crate::source_kind::SourceKind;
use crate::traits::EntropySource;

use super::readiness::ReadinessGate;
use super::syscall::fill_exact;

/// Fallback device read when `getrandom(2)` is unavailable.
pub const URANDOM_PATH: &str = "/dev/urandom";

/// Reads a character device after its [`ReadinessGate`] has opened.
///
/// The device is opened for each request and closed on every exit path.
pub struct DeviceSource {
    path: &'static str,
    gate: &'static ReadinessGate,
}

impl DeviceSource {
    /// Creates a source reading `path`, gated by `gate`.
    pub const fn new(path: &'static str, gate: &'static ReadinessGate) -> Self {
        Self { path, gate }
    }

    /// Path of the device being read.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl EntropySource for DeviceSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        let failed = |err: OsError| SecureRandomError::acquisition(SourceKind::SecondaryDevice, err);

        self.gate.ensure_ready()?;

        let mut device = File::open(self.path).map_err(|err| failed(err.into()))?;
        fill_exact(dest, |buf| device.read(buf).map_err(OsError::from)).map_err(failed)
    }
}
