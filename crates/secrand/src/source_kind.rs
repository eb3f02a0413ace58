// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// The acquisition strategy backing a process-wide entropy source.
///
/// Exactly one kind is selected per process, on first use, and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Kernel `getrandom(2)` syscall issued directly on the destination buffer.
    PrimarySyscall,
    /// `/dev/urandom`, read only after the kernel pool was observed ready.
    SecondaryDevice,
    /// The platform's standard CSPRNG entry point.
    VendorApi,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrimarySyscall => "getrandom(2)",
            Self::SecondaryDevice => "/dev/urandom",
            Self::VendorApi => "vendor CSPRNG",
        };
        f.write_str(name)
    }
}
