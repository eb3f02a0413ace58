// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::OsError;
use crate::linux::syscall::fill_exact;

#[test]
fn test_short_writes_are_continued() {
    let mut bytes = [0u8; 10];
    let mut calls = 0;

    let result = fill_exact(&mut bytes, |buf| {
        calls += 1;
        buf[0] = calls;
        Ok(1)
    });

    assert_eq!(result, Ok(()));
    assert_eq!(calls, 10);
    assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_interruptions_are_retried() {
    let mut bytes = [0u8; 4];
    let mut outcomes = vec![
        Ok(4),
        Err(OsError::Errno(libc::EAGAIN)),
        Err(OsError::Errno(libc::EINTR)),
    ];

    let result = fill_exact(&mut bytes, |buf| {
        let outcome = outcomes.pop().expect("Failed to pop()");
        if outcome.is_ok() {
            buf.fill(9);
        }
        outcome
    });

    assert_eq!(result, Ok(()));
    assert!(outcomes.is_empty());
    assert_eq!(bytes, [9; 4]);
}

#[test]
fn test_other_errors_are_returned() {
    let mut bytes = [0u8; 4];
    let mut calls = 0;

    let result = fill_exact(&mut bytes, |_| {
        calls += 1;
        Err(OsError::Errno(libc::EFAULT))
    });

    assert_eq!(result, Err(OsError::Errno(libc::EFAULT)));
    assert_eq!(calls, 1);
}

#[test]
fn test_zero_length_write_is_unexpected_eof() {
    let mut bytes = [0u8; 4];

    let result = fill_exact(&mut bytes, |_| Ok(0));

    assert_eq!(result, Err(OsError::UnexpectedEof));
}

#[test]
fn test_overlong_write_is_unexpected_eof() {
    let mut bytes = [0u8; 4];

    let result = fill_exact(&mut bytes, |buf| Ok(buf.len() + 1));

    assert_eq!(result, Err(OsError::UnexpectedEof));
}

#[test]
fn test_empty_destination_never_calls() {
    let mut bytes: [u8; 0] = [];

    let result = fill_exact(&mut bytes, |_| panic!("must not be called"));

    assert_eq!(result, Ok(()));
}
