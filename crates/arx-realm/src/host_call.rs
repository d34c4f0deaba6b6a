// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Exit and query helpers over the root-privilege host call.
//!
//! A realm context finishes its work by telling the host how things went:
//! a one-way host call carrying an exit command and the issuing REC
//! number. The host reads the verdict and decides what to schedule next.

use arx_abi::call::{CALL_ARG_COUNT, CallArgs, HostCallBlock, HostCallCmd, fid};
use arx_core::transport::RootCall;

/// Yield to the host with an exit verdict for REC `rec`.
///
/// One-way: the call reports nothing back, and for the exit commands the
/// context does not expect to be resumed at all.
pub fn exit_to_host<R: RootCall>(root: &mut R, cmd: HostCallCmd, rec: u64) {
    let mut block = HostCallBlock::new(cmd);
    block.gprs[0] = rec;
    let _ = root.host_call(&mut block);
}

/// Query the ABI version of the root-privilege interface.
///
/// Returns the version result register; the interface answers version
/// queries unconditionally, so there is no status to check.
pub fn abi_version<R: RootCall>(root: &mut R, requested: u64) -> u64 {
    let mut args = [0; CALL_ARG_COUNT];
    args[0] = requested;
    let ret = root.call(CallArgs::with_args(fid::ABI_VERSION, args));
    ret.regs[0]
}
