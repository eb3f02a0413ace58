// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs::File;
use std::os::fd::AsRawFd;

use crate::error::{OsError, SecureRandomError};
use crate::source_kind::SourceKind;

use super::single_flight::SingleFlight;

/// Device whose readability signals that the kernel pool is seeded.
pub const RANDOM_PATH: &str = "/dev/random";

/// Blocks until the kernel entropy pool is ready.
pub type WaitFn = fn() -> Result<(), SecureRandomError>;

/// Blocks the first caller until the kernel signals entropy readiness.
///
/// Exactly one thread waits at a time; late arrivers wait for that thread
/// and then proceed without polling. Once readiness has been observed no
/// caller ever blocks again. A failed wait is returned to its caller and
/// leaves the gate closed, so the next caller polls again.
pub struct ReadinessGate {
    flight: SingleFlight,
    wait: WaitFn,
}

impl ReadinessGate {
    /// Creates a gate that polls [`RANDOM_PATH`].
    pub const fn new() -> Self {
        Self::with_wait(wait_for_entropy)
    }

    /// Creates a gate that calls `wait` instead of polling the device.
    pub const fn with_wait(wait: WaitFn) -> Self {
        Self {
            flight: SingleFlight::new(),
            wait,
        }
    }

    /// Whether readiness has been observed.
    pub fn is_ready(&self) -> bool {
        self.flight.peek() == Some(true)
    }

    /// Returns once the kernel pool has been observed ready.
    ///
    /// The first call may block indefinitely; there is no timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SecureRandomError::AcquisitionFailed`] if polling fails with
    /// anything other than `EINTR`/`EAGAIN`.
    pub fn ensure_ready(&self) -> Result<(), SecureRandomError> {
        self.flight
            .resolve(|| {
                (self.wait)()
                    .inspect(|_| log::debug!("kernel entropy pool reported ready"))
                    .inspect_err(|err| log::warn!("entropy readiness poll failed: {err}"))
                    .map(|()| true)
            })
            .map(|_| ())
    }

    #[cfg(test)]
    pub(crate) fn reset(&self) {
        self.flight.reset();
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}

fn wait_for_entropy() -> Result<(), SecureRandomError> {
    let failed = |err: OsError| SecureRandomError::acquisition(SourceKind::SecondaryDevice, err);

    let device = File::open(RANDOM_PATH).map_err(|err| failed(err.into()))?;
    let mut pollfd = libc::pollfd {
        fd: device.as_raw_fd(),
        events: libc::POLLIN,
        revents: 0,
    };

    loop {
        // Infinite timeout
        let ret = unsafe { libc::poll(&mut pollfd, 1, -1) };
        if ret >= 0 {
            return Ok(());
        }

        let err = OsError::last();
        if !err.is_interrupted() {
            return Err(failed(err));
        }
    }
}
