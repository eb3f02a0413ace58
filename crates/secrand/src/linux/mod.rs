// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Linux / Android acquisition: `getrandom(2)` with a `/dev/urandom` fallback.

pub(crate) mod device;
pub(crate) mod primary;
pub(crate) mod probe;
pub(crate) mod readiness;
pub(crate) mod single_flight;
pub(crate) mod syscall;

pub use device::{DeviceSource, URANDOM_PATH};
pub use primary::GetRandomSource;
pub use probe::{CapabilityState, GetRandomProbe, TrialFn};
pub use readiness::{RANDOM_PATH, ReadinessGate, WaitFn};

/// Process-wide `getrandom(2)` capability probe.
pub(crate) static GETRANDOM_PROBE: GetRandomProbe = GetRandomProbe::new();

/// Process-wide `/dev/random` readiness gate for the `/dev/urandom` fallback.
pub(crate) static URANDOM_READINESS: ReadinessGate = ReadinessGate::new();
