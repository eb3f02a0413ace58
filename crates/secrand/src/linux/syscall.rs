// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::c_uint;

use crate::error::OsError;

/// Issues `getrandom(2)` as a raw syscall so that a kernel without support
/// answers `ENOSYS` regardless of the libc in use.
///
/// Returns the number of bytes written.
pub(crate) fn getrandom(buf: &mut [u8], flags: c_uint) -> Result<usize, OsError> {
    let ret = unsafe {
        libc::syscall(
            libc::SYS_getrandom,
            buf.as_mut_ptr().cast::<libc::c_void>(),
            buf.len(),
            flags,
        )
    };

    if ret < 0 {
        Err(OsError::last())
    } else {
        Ok(ret as usize)
    }
}

/// One-byte `GRND_NONBLOCK` call used by the capability probe.
pub(crate) fn getrandom_nonblock(buf: &mut [u8]) -> Result<usize, OsError> {
    getrandom(buf, libc::GRND_NONBLOCK)
}

/// Calls `fill` on the unwritten remainder of `dest` until every byte is
/// written.
///
/// Short writes are continued, `EINTR`/`EAGAIN` are retried, any other error
/// is returned. A call that writes nothing, or claims more than it was given,
/// fails with [`OsError::UnexpectedEof`].
pub(crate) fn fill_exact(
    mut dest: &mut [u8],
    mut fill: impl FnMut(&mut [u8]) -> Result<usize, OsError>,
) -> Result<(), OsError> {
    while !dest.is_empty() {
        match fill(dest) {
            Ok(0) => return Err(OsError::UnexpectedEof),
            Ok(written) => {
                let rest = core::mem::take(&mut dest);
                dest = rest.get_mut(written..).ok_or(OsError::UnexpectedEof)?;
            }
            Err(err) if err.is_interrupted() => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
