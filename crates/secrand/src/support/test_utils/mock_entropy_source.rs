// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{OsError, SecureRandomError};
use crate::source_kind::SourceKind;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to the system entropy source).
    None,
    /// Writes the given byte to every position.
    FillWith(u8),
    /// Always fail fill_bytes.
    FailAlways,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
}

/// Mock entropy source for testing.
///
/// Counts every `fill_bytes` call and can simulate failures via
/// [`MockEntropySourceBehaviour`]. Safe to share across threads.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    origin: SourceKind,
    fill_bytes_count: AtomicUsize,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self::with_origin(behaviour, SourceKind::VendorApi)
    }

    /// Creates a mock whose simulated failures are attributed to `origin`.
    pub fn with_origin(behaviour: MockEntropySourceBehaviour, origin: SourceKind) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            origin,
            fill_bytes_count: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&self) {
        self.fill_bytes_count.store(0, Ordering::SeqCst);
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.load(Ordering::SeqCst)
    }

    fn simulated_failure(&self) -> SecureRandomError {
        SecureRandomError::acquisition(self.origin, OsError::Other("simulated failure".into()))
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SecureRandomError> {
        let current = self.fill_bytes_count.fetch_add(1, Ordering::SeqCst);

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FillWith(byte) => {
                dest.fill(byte);
                Ok(())
            }
            MockEntropySourceBehaviour::FailAlways => Err(self.simulated_failure()),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if current + 1 == n => {
                Err(self.simulated_failure())
            }
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => self.inner.fill_bytes(dest),
        }
    }
}
