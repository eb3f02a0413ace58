// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::traits::CapabilityProbe;

/// Mock capability probe with a fixed answer.
///
/// Counts every `is_available` call so tests can assert how often the
/// probe was consulted.
pub struct MockCapabilityProbe {
    available: AtomicBool,
    probe_count: AtomicUsize,
}

impl MockCapabilityProbe {
    /// Creates a probe that answers `available`.
    pub fn new(available: bool) -> Self {
        Self {
            available: AtomicBool::new(available),
            probe_count: AtomicUsize::new(0),
        }
    }

    /// Changes the answer for subsequent calls.
    pub fn change_answer(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Returns how many times `is_available` was called.
    pub fn probe_count(&self) -> usize {
        self.probe_count.load(Ordering::SeqCst)
    }
}

impl CapabilityProbe for MockCapabilityProbe {
    fn is_available(&self) -> bool {
        self.probe_count.fetch_add(1, Ordering::SeqCst);
        self.available.load(Ordering::SeqCst)
    }
}
