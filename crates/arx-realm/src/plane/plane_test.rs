// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the plane-switch protocol.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use arx_abi::call::{CALL_ARG_COUNT, CallReturn, CallStatus};
use arx_core::transport::{MockNestedCall, MockRootCall};

fn switch_at(identity: PlaneId) -> PlaneSwitch<MockRootCall, MockNestedCall> {
    PlaneSwitch::new(identity, MockRootCall::new(), MockNestedCall::new())
}

/// Tear the mocks back out to inspect what was issued.
fn into_mocks<R: arx_core::RootCall, N: arx_core::NestedCall>(s: PlaneSwitch<R, N>) -> (R, N) {
    let PlaneSwitch { root, nested, .. } = s;
    (root, nested)
}

#[test]
fn plane_id_returns_identity_register() {
    let mut nested = MockNestedCall::new();
    let mut regs = [0; CALL_ARG_COUNT];
    regs[0] = 2;
    nested.enqueue(CallReturn::success(regs));
    let mut switch = PlaneSwitch::new(PlaneId::new(2), MockRootCall::new(), nested);

    assert_eq!(switch.plane_id(), PlaneId::new(2));

    let (_, nested) = into_mocks(switch);
    assert_eq!(nested.call_count(), 1);
    let call = nested.last_call().unwrap();
    assert_eq!(call.fid, HostCallCmd::GetPlaneId.as_u64());
    assert_eq!(call.args, [0; CALL_ARG_COUNT]);
}

#[test]
fn plane_id_failure_yields_unknown_sentinel() {
    let nested = MockNestedCall::failing(CallStatus::new(1));
    let mut switch = PlaneSwitch::new(PlaneId::new(1), MockRootCall::new(), nested);

    let id = switch.plane_id();
    assert!(id.is_unknown());
    assert!(!id.is_root());
}

#[test]
fn exit_from_root_issues_no_call() {
    let mut switch = switch_at(PlaneId::ROOT);
    switch.exit_to_plane0(HostCallCmd::ExitSuccess);
    switch.exit_to_plane0(HostCallCmd::ExitFailed);

    let (root, nested) = into_mocks(switch);
    assert_eq!(nested.call_count(), 0);
    assert_eq!(root.call_count(), 0);
    assert_eq!(root.host_call_count(), 0);
}

#[test]
fn exit_from_nested_plane_issues_exactly_one_call() {
    let mut switch = switch_at(PlaneId::new(1));
    switch.exit_to_plane0(HostCallCmd::ExitSuccess);

    let (_, nested) = into_mocks(switch);
    assert_eq!(nested.call_count(), 1);
    assert_eq!(
        nested.last_call().unwrap().fid,
        HostCallCmd::ExitSuccess.as_u64()
    );
}

#[test]
fn exit_ignores_transport_status() {
    let nested = MockNestedCall::failing(CallStatus::new(0xffff));
    let mut switch = PlaneSwitch::new(PlaneId::new(3), MockRootCall::new(), nested);

    // One-way yield: a failure status changes nothing for the caller.
    switch.exit_to_plane0(HostCallCmd::PrintRequest);

    let (_, nested) = into_mocks(switch);
    assert_eq!(nested.call_count(), 1);
}

#[test]
fn buffer_address_root_path_reads_block() {
    let mut root = MockRootCall::new();
    let mut gprs = [0; CALL_ARG_COUNT];
    gprs[0] = 0x8800_0000;
    root.enqueue_host_call(CallStatus::SUCCESS, gprs);
    let mut switch = PlaneSwitch::new(PlaneId::ROOT, root, MockNestedCall::new());

    assert_eq!(switch.shared_buffer_address(), 0x8800_0000);

    let (root, nested) = into_mocks(switch);
    // Root path: one host call, zero nested calls.
    assert_eq!(root.host_call_count(), 1);
    assert_eq!(nested.call_count(), 0);
    assert_eq!(
        root.host_calls()[0].imm,
        HostCallCmd::GetSharedBuffer.as_u64()
    );
}

#[test]
fn buffer_address_root_path_failure_yields_null() {
    let root = MockRootCall::failing(CallStatus::new(2));
    let mut switch = PlaneSwitch::new(PlaneId::ROOT, root, MockNestedCall::new());

    assert_eq!(switch.shared_buffer_address(), 0);
}

#[test]
fn buffer_address_nested_path_reads_result_register() {
    let mut nested = MockNestedCall::new();
    let mut regs = [0; CALL_ARG_COUNT];
    regs[0] = 0x9900_0000;
    nested.enqueue(CallReturn::success(regs));
    let mut switch = PlaneSwitch::new(PlaneId::new(1), MockRootCall::new(), nested);

    assert_eq!(switch.shared_buffer_address(), 0x9900_0000);

    let (root, nested) = into_mocks(switch);
    // Nested path: one nested call, zero root calls.
    assert_eq!(nested.call_count(), 1);
    assert_eq!(root.host_call_count(), 0);
    assert_eq!(
        nested.last_call().unwrap().fid,
        HostCallCmd::GetSharedBuffer.as_u64()
    );
}

#[test]
fn buffer_address_nested_path_failure_yields_null() {
    let nested = MockNestedCall::failing(CallStatus::new(7));
    let mut switch = PlaneSwitch::new(PlaneId::new(2), MockRootCall::new(), nested);

    assert_eq!(switch.shared_buffer_address(), 0);
}

#[test]
fn identity_is_resolved_at_construction() {
    let switch = switch_at(PlaneId::new(4));
    assert_eq!(switch.identity(), PlaneId::new(4));
}
