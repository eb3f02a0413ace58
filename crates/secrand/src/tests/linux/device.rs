// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{OsError, SecureRandomError};
use crate::linux::device::{DeviceSource, URANDOM_PATH};
use crate::linux::readiness::ReadinessGate;
use crate::source_kind::SourceKind;
use crate::traits::EntropySource;

fn ready() -> Result<(), SecureRandomError> {
    Ok(())
}

static OPEN_GATE: ReadinessGate = ReadinessGate::with_wait(ready);

fn open_fds() -> usize {
    std::fs::read_dir("/proc/self/fd")
        .map(|entries| entries.count())
        .unwrap_or_default()
}

#[test]
fn test_reads_exactly_len_bytes() {
    let source = DeviceSource::new("/dev/zero", &OPEN_GATE);
    let mut bytes = vec![0xFFu8; 131072];

    source.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");

    assert!(bytes.iter().all(|b| *b == 0));
}

#[test]
fn test_urandom_fill() {
    let source = DeviceSource::new(URANDOM_PATH, &OPEN_GATE);
    let mut bytes = [0u8; 512];

    source.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");

    assert_eq!(source.path(), URANDOM_PATH);
    assert!(secrand_test_utils::looks_filled(&bytes, 0));
}

#[test]
fn test_missing_device_is_acquisition_failure() {
    let source = DeviceSource::new("/dev/secrand-does-not-exist", &OPEN_GATE);
    let mut bytes = [0u8; 16];

    let result = source.fill_bytes(&mut bytes);

    assert_eq!(
        result,
        Err(SecureRandomError::AcquisitionFailed {
            origin: SourceKind::SecondaryDevice,
            error: OsError::Errno(libc::ENOENT),
        })
    );
}

#[test]
fn test_empty_device_is_unexpected_eof() {
    let source = DeviceSource::new("/dev/null", &OPEN_GATE);
    let mut bytes = [0u8; 16];

    let result = source.fill_bytes(&mut bytes);

    assert_eq!(
        result,
        Err(SecureRandomError::AcquisitionFailed {
            origin: SourceKind::SecondaryDevice,
            error: OsError::UnexpectedEof,
        })
    );
}

#[test]
fn test_gate_failure_stops_before_open() {
    static WAITS: AtomicUsize = AtomicUsize::new(0);
    static FAILING_GATE: ReadinessGate = ReadinessGate::with_wait(fail);

    fn fail() -> Result<(), SecureRandomError> {
        WAITS.fetch_add(1, Ordering::SeqCst);
        Err(SecureRandomError::acquisition(
            SourceKind::SecondaryDevice,
            OsError::Errno(libc::EIO),
        ))
    }

    // Opening this path would fail with ENOENT; seeing EIO proves it was never opened.
    let source = DeviceSource::new("/dev/secrand-does-not-exist", &FAILING_GATE);
    let mut bytes = [0u8; 16];

    let result = source.fill_bytes(&mut bytes);

    assert!(matches!(
        result,
        Err(SecureRandomError::AcquisitionFailed {
            error: OsError::Errno(libc::EIO),
            ..
        })
    ));
    assert_eq!(WAITS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_gate_waits_once_across_reads() {
    static WAITS: AtomicUsize = AtomicUsize::new(0);
    static COUNTING_GATE: ReadinessGate = ReadinessGate::with_wait(wait);

    fn wait() -> Result<(), SecureRandomError> {
        WAITS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    let source = DeviceSource::new(URANDOM_PATH, &COUNTING_GATE);
    for _ in 0..10 {
        let mut bytes = [0u8; 32];
        source.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");
    }

    assert_eq!(WAITS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_device_handle_released_on_every_path() {
    let ok = DeviceSource::new(URANDOM_PATH, &OPEN_GATE);
    let eof = DeviceSource::new("/dev/null", &OPEN_GATE);

    // Warm up lazily opened descriptors before counting.
    let mut bytes = [0u8; 64];
    let _ = ok.fill_bytes(&mut bytes);
    let _ = eof.fill_bytes(&mut bytes);
    let before = open_fds();

    for _ in 0..256 {
        let _ = ok.fill_bytes(&mut bytes);
        let _ = eof.fill_bytes(&mut bytes);
    }

    // Other tests may open descriptors concurrently; 256 leaks would dwarf that.
    assert!(open_fds() < before + 64);
}
