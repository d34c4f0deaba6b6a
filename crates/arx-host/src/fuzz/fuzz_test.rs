// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the argument-preservation fuzz harness.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use arx_abi::call::{CallReturn, CallStatus, HostCallBlock};
use proptest::prelude::*;

/// A callee that echoes the argument registers back, optionally
/// corrupting the positions selected by `corrupt`.
struct EchoTransport {
    corrupt: u64,
    calls: Vec<CallArgs>,
}

impl EchoTransport {
    fn clean() -> Self {
        Self {
            corrupt: 0,
            calls: Vec::new(),
        }
    }

    fn corrupting(corrupt: u64) -> Self {
        Self {
            corrupt,
            calls: Vec::new(),
        }
    }
}

impl RootCall for EchoTransport {
    fn call(&mut self, args: CallArgs) -> CallReturn {
        self.calls.push(args);
        let mut regs = args.args;
        for (position, reg) in regs.iter_mut().enumerate() {
            if self.corrupt & (1 << position) != 0 {
                *reg = reg.wrapping_add(1);
            }
        }
        CallReturn::success(regs)
    }

    fn host_call(&mut self, _block: &mut HostCallBlock) -> CallStatus {
        unreachable!("the fuzz harness never issues host calls")
    }
}

#[test]
fn clean_echo_is_clean() {
    let mut harness = ArgumentFuzzHarness::new(EchoTransport::clean(), 1);
    let verdict = harness.run(0xc400_0150, 3);

    assert!(verdict.is_clean());
    assert_eq!(verdict.mismatch_count(), 0);
}

#[test]
fn corrupted_position_sets_exactly_that_bit() {
    let mut harness = ArgumentFuzzHarness::new(EchoTransport::corrupting(1 << 2), 1);
    let verdict = harness.run(0xc400_0150, 3);

    assert!(!verdict.is_clean());
    assert_eq!(verdict.as_u64(), 1 << 2);
    assert!(verdict.mismatched(2));
    assert!(!verdict.mismatched(0));
    assert!(!verdict.mismatched(1));
}

#[test]
fn corruption_above_requested_count_is_invisible() {
    // Position 5 is corrupted, but only 3 arguments are probed.
    let mut harness = ArgumentFuzzHarness::new(EchoTransport::corrupting(1 << 5), 1);
    let verdict = harness.run(0xc400_0150, 3);

    assert!(verdict.is_clean());
}

#[test]
fn run_issues_exactly_one_call() {
    let mut harness = ArgumentFuzzHarness::new(EchoTransport::clean(), 7);
    let _ = harness.run(0xc400_0150, 7);
    let _ = harness.run(0xc400_0151, 2);

    let transport = harness.into_transport();
    assert_eq!(transport.calls.len(), 2);
    assert_eq!(transport.calls[0].fid, 0xc400_0150);
    assert_eq!(transport.calls[1].fid, 0xc400_0151);
}

#[test]
fn cascade_repopulates_lower_slots() {
    let mut harness = ArgumentFuzzHarness::new(EchoTransport::clean(), 42);

    let _ = harness.run(0x1, CALL_ARG_COUNT);
    let wide = *harness.sent();

    let _ = harness.run(0x1, 3);
    let narrow = *harness.sent();

    // Slots below the requested count are freshly derived, not carried
    // over from the wider run.
    assert_ne!(&wide[..3], &narrow[..3]);
    // Slots at and above the requested count travel as zero.
    assert_eq!(&narrow[3..], &[0, 0, 0, 0]);
    // The wider run had populated them.
    assert!(wide[3..].iter().any(|&v| v != 0));
}

#[test]
fn zero_arguments_is_a_clean_no_payload_probe() {
    let mut harness = ArgumentFuzzHarness::new(EchoTransport::corrupting(u64::MAX), 1);
    let verdict = harness.run(0x2, 0);

    assert!(verdict.is_clean());
    assert_eq!(harness.sent(), &[0; CALL_ARG_COUNT]);
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut first = ArgumentFuzzHarness::new(EchoTransport::clean(), 7);
    let mut second = ArgumentFuzzHarness::new(EchoTransport::clean(), 7);

    let _ = first.run(0x1, 5);
    let _ = second.run(0x1, 5);
    assert_eq!(first.sent(), second.sent());
}

#[test]
#[should_panic(expected = "exceeds transport capacity")]
fn oversized_argument_count_aborts() {
    let mut harness = ArgumentFuzzHarness::new(EchoTransport::clean(), 1);
    let _ = harness.run(0x1, CALL_ARG_COUNT + 1);
}

proptest! {
    /// Echo law: the verdict mask equals the injected corruption mask,
    /// restricted to the probed positions.
    #[test]
    fn echo_law(
        corrupt in any::<u64>(),
        n_args in 0usize..=CALL_ARG_COUNT,
        seed in any::<u64>(),
    ) {
        let mut harness =
            ArgumentFuzzHarness::new(EchoTransport::corrupting(corrupt), seed);
        let verdict = harness.run(0xc400_0150, n_args);

        let probed = (1u64 << n_args) - 1;
        prop_assert_eq!(verdict.as_u64(), corrupt & probed);
    }
}
