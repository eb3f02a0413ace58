// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking entropy sources and capability probes.
//!
//! Provides call-counting mocks with configurable behavior for testing.

mod mock_capability_probe;
mod mock_entropy_source;

pub use mock_capability_probe::MockCapabilityProbe;
pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
