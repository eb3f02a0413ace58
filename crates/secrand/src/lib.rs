// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secrand
//!
//! Cryptographically secure random bytes from the operating system, through
//! one API on every platform.
//!
//! secrand never generates entropy itself. It works out, once per process,
//! which OS facility is safely usable, falls back when the preferred one is
//! missing, and reports failure instead of ever handing back a partially
//! filled buffer.
//!
//! ## Core Types
//!
//! - [`SecureRandom`]: request validation and the public byte API
//! - [`SystemEntropySource`]: process-wide OS source, selected on first use
//! - [`Orchestrator`]: probed primary source with an optional fallback
//!
//! ## Traits
//!
//! - [`EntropySource`]: "fill this buffer or fail"
//! - [`CapabilityProbe`]: one-time availability check
//!
//! ## Example
//!
//! ```rust
//! use secrand::SecureRandom;
//!
//! let random = SecureRandom::new();
//!
//! let key = random.next_bytes_of(32).expect("Failed to generate entropy");
//! assert_eq!(key.len(), 32);
//!
//! let mut nonce = [0u8; 24];
//! random
//!     .next_bytes_copy_to(Some(&mut nonce[..]))
//!     .expect("Failed to generate entropy");
//!
//! assert!(random.next_bytes_of(-1).is_err());
//! ```
//!
//! ## Platform Support
//!
//! - Linux/Android: `getrandom(2)` if the kernel provides it and seccomp
//!   allows it, otherwise `/dev/urandom` once `/dev/random` polls ready
//!   (`urandom_fallback` feature, on by default)
//! - macOS/iOS, Windows, WASI, Web: the vendor CSPRNG via `getrandom`
//!
//! ## Logging
//!
//! Source selection is reported through the `log` facade. No logger is
//! installed and generated bytes are never logged.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod orchestrator;
mod secure_random;
mod source_kind;
mod support;
mod system;
mod traits;
mod vendor;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

pub use error::{OsError, SecureRandomError};
pub use orchestrator::{Orchestrator, Route};
pub use secure_random::SecureRandom;
pub use source_kind::SourceKind;
pub use system::{StrongEntropySource, SystemEntropySource};
pub use traits::{CapabilityProbe, EntropySource};
pub use vendor::VendorApiSource;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::{
    CapabilityState, DeviceSource, GetRandomProbe, GetRandomSource, RANDOM_PATH, ReadinessGate,
    TrialFn, URANDOM_PATH, WaitFn,
};

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
