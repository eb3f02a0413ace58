// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{OsError, SecureRandomError};
use crate::source_kind::SourceKind;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_fill_with() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FillWith(0x5A));
    let mut buf = [0u8; 32];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert!(buf.iter().all(|b| *b == 0x5A));
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_mock_entropy_source_failure_carries_origin() {
    let mock = MockEntropySource::with_origin(
        MockEntropySourceBehaviour::FailAlways,
        SourceKind::SecondaryDevice,
    );
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert_eq!(
        result,
        Err(SecureRandomError::AcquisitionFailed {
            origin: SourceKind::SecondaryDevice,
            error: OsError::Other("simulated failure".into()),
        })
    );
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    // First fails
    assert!(mock.fill_bytes(&mut buf).is_err());

    // Change behaviour
    mock.change_behaviour(MockEntropySourceBehaviour::FillWith(0x33));

    // Now works
    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert!(buf.iter().all(|b| *b == 0x33));

    // Change back
    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);

    // Fails again
    assert!(mock.fill_bytes(&mut buf).is_err());
    assert_eq!(mock.call_count(), 3);
}

#[test]
fn test_mock_entropy_source_reset_count() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_err());
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);

    // The Nth-call countdown restarts with the counter.
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_err());
    assert_eq!(mock.call_count(), 2);
}
