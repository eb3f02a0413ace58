// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lock-free single-flight resolution of a process-wide boolean.
//!
//! The cell starts `UNKNOWN`. A thread that wants to decide swaps `UNKNOWN`
//! for a unique per-attempt token, runs the decision, and publishes a terminal
//! value. Threads that observe a token yield until the cell leaves it. A failed
//! or unwinding decision hands the cell back to `UNKNOWN` so a later caller can
//! retry; only a successful decision is ever cached.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Not yet decided
const UNKNOWN: usize = 0;
/// Decided: `false`
const RESOLVED_FALSE: usize = 1;
/// Decided: `true`
const RESOLVED_TRUE: usize = 2;
/// Claim tokens start here so they never collide with the states above
const FIRST_TOKEN: usize = 3;

static NEXT_TOKEN: AtomicUsize = AtomicUsize::new(FIRST_TOKEN);

fn next_token() -> usize {
    loop {
        let token = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        if token >= FIRST_TOKEN {
            return token;
        }
    }
}

pub(crate) struct SingleFlight {
    state: AtomicUsize,
}

impl SingleFlight {
    pub(crate) const fn new() -> Self {
        Self {
            state: AtomicUsize::new(UNKNOWN),
        }
    }

    /// Returns the terminal value, or `None` while undecided or in flight.
    #[inline]
    pub(crate) fn peek(&self) -> Option<bool> {
        match self.state.load(Ordering::Acquire) {
            RESOLVED_TRUE => Some(true),
            RESOLVED_FALSE => Some(false),
            _ => None,
        }
    }

    /// Returns the cached value, running `decide` first if this thread wins
    /// the claim. `decide` runs at most once per successful resolution.
    #[inline]
    pub(crate) fn resolve<E>(&self, decide: impl FnOnce() -> Result<bool, E>) -> Result<bool, E> {
        // Fast path: already resolved
        if let Some(value) = self.peek() {
            return Ok(value);
        }

        self.resolve_slow(decide)
    }

    #[cold]
    #[inline(never)]
    fn resolve_slow<E>(&self, decide: impl FnOnce() -> Result<bool, E>) -> Result<bool, E> {
        let token = next_token();

        loop {
            match self
                .state
                .compare_exchange(UNKNOWN, token, Ordering::Acquire, Ordering::Acquire)
            {
                Ok(_) => break,
                Err(RESOLVED_TRUE) => return Ok(true),
                Err(RESOLVED_FALSE) => return Ok(false),
                // Another thread holds the claim; wait for it to publish or release.
                Err(_) => std::thread::yield_now(),
            }
        }

        let claim = Claim {
            state: &self.state,
            token,
        };
        let value = decide()?;
        claim.publish(value);

        Ok(value)
    }

    #[cfg(test)]
    pub(crate) fn reset(&self) {
        self.state.store(UNKNOWN, Ordering::SeqCst);
    }
}

/// Held by the deciding thread. Dropping it without publishing releases the
/// cell back to `UNKNOWN`.
struct Claim<'a> {
    state: &'a AtomicUsize,
    token: usize,
}

impl Claim<'_> {
    fn publish(&self, value: bool) {
        let terminal = if value { RESOLVED_TRUE } else { RESOLVED_FALSE };
        let _ = self.state.compare_exchange(
            self.token,
            terminal,
            Ordering::Release,
            Ordering::Relaxed,
        );
    }
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        // No-op once published.
        let _ = self.state.compare_exchange(
            self.token,
            UNKNOWN,
            Ordering::Release,
            Ordering::Relaxed,
        );
    }
}
