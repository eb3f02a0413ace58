// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{OsError, SecureRandomError};
use crate::linux::primary::GetRandomSource;
use crate::source_kind::SourceKind;
use crate::traits::EntropySource;

#[test]
fn test_fill_sizes_around_interrupt_boundary() {
    let source = GetRandomSource::new();

    for size in secrand_test_utils::FILL_SIZES {
        let mut bytes = vec![0u8; size];
        source.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");
        assert_eq!(bytes.len(), size);
    }
}

#[test]
fn test_fill_looks_random() {
    let source = GetRandomSource::default();
    let mut bytes = [0u8; 4096];

    source.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");

    assert!(secrand_test_utils::looks_filled(&bytes, 0));
}

#[test]
fn test_blocking_pool_fill() {
    let source = GetRandomSource::blocking_pool();
    let mut bytes = [0u8; 512];

    source.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");

    assert!(secrand_test_utils::looks_filled(&bytes, 0));
}

#[test]
fn test_kernel_rejection_carries_errno() {
    use crate::linux::syscall::getrandom;

    // A valid call reports the written length.
    let mut byte = [0u8; 1];
    assert_eq!(getrandom(&mut byte, 0), Ok(1));

    // Unknown flag bits are rejected by the kernel.
    let err = getrandom(&mut byte, 0x8000).expect_err("unknown flags must fail");
    assert_eq!(err, OsError::Errno(libc::EINVAL));

    let err = SecureRandomError::acquisition(SourceKind::PrimarySyscall, err);
    assert!(err.to_string().contains("getrandom(2)"));
}
