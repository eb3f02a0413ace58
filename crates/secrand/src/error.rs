// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::source_kind::SourceKind;

fn describe(code: &i32) -> std::io::Error {
    std::io::Error::from_raw_os_error(*code)
}

/// Low-level failure reported by an OS entropy facility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsError {
    /// Raw OS error code (`errno` on Unix, `NTSTATUS`-derived on Windows).
    #[error("{}", describe(.0))]
    Errno(i32),
    /// The facility reported success but produced no bytes for a non-empty request.
    #[error("entropy source returned no data")]
    UnexpectedEof,
    /// Vendor failure without a raw OS code.
    #[error("{0}")]
    Other(String),
}

impl OsError {
    /// Captures `errno` from the calling thread.
    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub(crate) fn last() -> Self {
        Self::from(std::io::Error::last_os_error())
    }

    /// Returns the raw OS error code, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Errno(code) => Some(*code),
            _ => None,
        }
    }

    /// `EINTR` or `EAGAIN`: the call may simply be issued again.
    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Errno(code) if *code == libc::EINTR || *code == libc::EAGAIN)
    }

    /// `ENOSYS` (no kernel support) or `EPERM` (blocked by a seccomp policy).
    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Errno(code) if *code == libc::ENOSYS || *code == libc::EPERM)
    }
}

impl From<std::io::Error> for OsError {
    fn from(err: std::io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => Self::Errno(code),
            None => Self::Other(err.to_string()),
        }
    }
}

impl From<getrandom::Error> for OsError {
    fn from(err: getrandom::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => Self::Errno(code),
            None => Self::Other(err.to_string()),
        }
    }
}

/// Errors that can occur when procuring secure random bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecureRandomError {
    /// The requested byte count is negative or cannot be allocated.
    #[error("InvalidArgument: byte count {0} is negative or cannot be allocated")]
    InvalidArgument(i64),
    /// No usable entropy source exists for this process.
    #[error("SourceUnavailable: {0}")]
    SourceUnavailable(&'static str),
    /// The requested generator (e.g. a strong instance) does not exist on this platform.
    #[error("AlgorithmUnavailable: {0}")]
    AlgorithmUnavailable(&'static str),
    /// The selected source's OS call reported a failure.
    #[error("AcquisitionFailed: {origin}: {error}")]
    AcquisitionFailed {
        /// Source that failed.
        origin: SourceKind,
        /// Underlying OS failure.
        #[source]
        error: OsError,
    },
}

impl SecureRandomError {
    pub(crate) fn acquisition(origin: SourceKind, error: impl Into<OsError>) -> Self {
        Self::AcquisitionFailed {
            origin,
            error: error.into(),
        }
    }
}
