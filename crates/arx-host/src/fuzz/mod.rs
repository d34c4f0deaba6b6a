// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Randomized-argument fuzz harness.
//!
//! Probes a privileged management interface for argument-preservation
//! violations: fill the argument registers with pseudo-random values,
//! issue one call, and report every position whose result register came
//! back different from what was sent.
//!
//! Argument generation follows the cascade rule: requesting `n_args`
//! populates every slot below `n_args` freshly on every run, so lower
//! slots can never carry stale values from an earlier, narrower run. The
//! rule is an explicit loop here; no part of it is generated.

use arx_abi::call::{CALL_ARG_COUNT, CallArgs};
use arx_core::transport::RootCall;
use core::fmt;
use log::debug;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[cfg(test)]
mod fuzz_test;

/// Per-position echo verdict of one fuzz run.
///
/// Bit `i` is set when argument `i` failed to round-trip. A non-zero
/// result signals a compliance violation in a context where preservation
/// is required; whether that fails the test is the caller's policy.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct EchoResult(u64);

impl EchoResult {
    /// Every argument round-tripped unchanged.
    pub const CLEAN: Self = Self(0);

    /// Get the raw mismatch bitmask.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns true if every argument round-tripped unchanged.
    #[inline]
    #[must_use]
    pub const fn is_clean(self) -> bool {
        self.0 == 0
    }

    /// Returns true if argument `position` failed to round-trip.
    #[inline]
    #[must_use]
    pub const fn mismatched(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    /// Number of argument positions that failed to round-trip.
    #[inline]
    #[must_use]
    pub const fn mismatch_count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Debug for EchoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EchoResult({:#b})", self.0)
    }
}

/// Fuzz harness over one root-privilege transport.
pub struct ArgumentFuzzHarness<R: RootCall> {
    root: R,
    rng: SmallRng,
    args: [u64; CALL_ARG_COUNT],
}

impl<R: RootCall> ArgumentFuzzHarness<R> {
    /// Create a harness with a caller-chosen seed.
    ///
    /// The seed makes failing runs reproducible: log it with the verdict
    /// and a violation can be replayed exactly.
    #[must_use]
    pub fn new(root: R, seed: u64) -> Self {
        Self {
            root,
            rng: SmallRng::seed_from_u64(seed),
            args: [0; CALL_ARG_COUNT],
        }
    }

    /// Probe `interface_id` with `n_args` freshly generated arguments.
    ///
    /// `n_args` beyond the transport's argument registers is a
    /// programming error and aborts. Every slot below `n_args` is
    /// re-derived on every call (cascade rule); slots at and above
    /// `n_args` travel as zero.
    pub fn run(&mut self, interface_id: u64, n_args: usize) -> EchoResult {
        assert!(
            n_args <= CALL_ARG_COUNT,
            "argument count {n_args} exceeds transport capacity"
        );

        self.args = [0; CALL_ARG_COUNT];
        for slot in self.args.iter_mut().take(n_args) {
            *slot = self.rng.next_u64();
        }

        let ret = self.root.call(CallArgs::with_args(interface_id, self.args));

        let mut mask = 0u64;
        for position in 0..n_args {
            if ret.regs[position] != self.args[position] {
                mask |= 1 << position;
            }
        }
        let verdict = EchoResult(mask);
        if !verdict.is_clean() {
            debug!(
                "interface {interface_id:#x} altered {} of {n_args} arguments (mask {:#b})",
                verdict.mismatch_count(),
                verdict.as_u64()
            );
        }
        verdict
    }

    /// The argument vector of the most recent run, as sent.
    #[must_use]
    pub const fn sent(&self) -> &[u64; CALL_ARG_COUNT] {
        &self.args
    }

    /// Hand the transport back, consuming the harness.
    #[must_use]
    pub fn into_transport(self) -> R {
        self.root
    }
}
