// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for secrand crates.
//!
//! Helpers for the statistical smoke test that a filled buffer really holds
//! random data. This is not entropy validation; it only catches buffers that
//! were left untouched or partially written.
//!
//! ## License
//!
//! GPL-3.0-only

/// Buffer sizes exercised by fill tests: around the 256-byte `getrandom(2)`
/// interruption boundary and the 65536-byte Web Crypto request limit.
pub const FILL_SIZES: [usize; 15] = [
    1, 2, 3, 96, 255, 256, 257, 511, 512, 513, 4096, 65535, 65536, 65537, 131072,
];

/// Maximum number of positions allowed to still equal the pre-fill sentinel
/// after filling a buffer of `size` bytes.
///
/// Some positions legitimately keep the sentinel value, so the tolerance is
/// looser for small buffers. A single byte has no tolerance at all and hits
/// the sentinel 1 time in 256; use [`fill_until_changed`] for it.
pub fn sentinel_limit(size: usize) -> usize {
    let pct = if size < 10 {
        0.5
    } else if size < 200 {
        0.04
    } else if size < 1000 {
        0.03
    } else if size < 10_000 {
        0.01
    } else {
        0.0075
    };

    (size as f64 * pct) as usize
}

/// Counts positions of `bytes` equal to `sentinel`.
pub fn count_sentinel(bytes: &[u8], sentinel: u8) -> usize {
    bytes.iter().filter(|&&byte| byte == sentinel).count()
}

/// Whether `bytes` looks filled: sentinel count within [`sentinel_limit`].
pub fn looks_filled(bytes: &[u8], sentinel: u8) -> bool {
    count_sentinel(bytes, sentinel) <= sentinel_limit(bytes.len())
}

/// Calls `fill` up to `attempts` times on a sentinel-initialized buffer of
/// `size` bytes and returns `true` as soon as one fill [`looks_filled`].
pub fn fill_until_changed<E>(
    size: usize,
    sentinel: u8,
    attempts: usize,
    mut fill: impl FnMut(&mut [u8]) -> Result<(), E>,
) -> Result<bool, E> {
    for _ in 0..attempts {
        let mut bytes = vec![sentinel; size];
        fill(&mut bytes)?;

        if looks_filled(&bytes, sentinel) {
            return Ok(true);
        }
    }

    Ok(false)
}
