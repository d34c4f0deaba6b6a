// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Plane-switch protocol.
//!
//! A plane yields control back to its root plane, queries its own identity
//! or asks where the shared buffer lives. The root plane talks to the host
//! through the root-privilege call; every other plane talks to the root
//! plane through the nested call. Both capabilities are resolved once per
//! execution context when the [`PlaneSwitch`] is constructed.

use arx_abi::call::{CallArgs, HostCallBlock, HostCallCmd};
use arx_abi::plane::PlaneId;
use arx_core::transport::{NestedCall, RootCall};
use log::debug;

#[cfg(test)]
mod plane_test;

/// Plane-switch protocol object for one execution context.
///
/// Holds the context's resolved identity and both transport capabilities.
/// The host-call block lives inside the object so the callee can reach it
/// for the duration of a root-privilege call.
pub struct PlaneSwitch<R: RootCall, N: NestedCall> {
    identity: PlaneId,
    root: R,
    nested: N,
    block: HostCallBlock,
}

impl<R: RootCall, N: NestedCall> PlaneSwitch<R, N> {
    /// Create the protocol object for a context whose identity was
    /// resolved at context setup.
    #[must_use]
    pub const fn new(identity: PlaneId, root: R, nested: N) -> Self {
        Self {
            identity,
            root,
            nested,
            block: HostCallBlock::new(HostCallCmd::GetSharedBuffer),
        }
    }

    /// The identity this context was constructed with.
    #[must_use]
    pub const fn identity(&self) -> PlaneId {
        self.identity
    }

    /// Ask the root plane for this context's identity.
    ///
    /// Issues one nested-call request with no arguments. Any non-success
    /// status yields [`PlaneId::UNKNOWN`]; callers must treat that
    /// sentinel as "unknown", never as the root plane.
    pub fn plane_id(&mut self) -> PlaneId {
        let ret = self
            .nested
            .call(CallArgs::new(HostCallCmd::GetPlaneId.as_u64()));
        if ret.is_success() {
            PlaneId::new(ret.regs[0])
        } else {
            PlaneId::UNKNOWN
        }
    }

    /// Yield control back to the root plane.
    ///
    /// A no-op when this context already is the root plane: no transport
    /// request is issued at all. Otherwise exactly one nested call carries
    /// `cmd`; the call reports nothing back - "returning" from it simply
    /// means the root plane scheduled this context again. There is no
    /// retry and no status to inspect.
    pub fn exit_to_plane0(&mut self, cmd: HostCallCmd) {
        if self.identity.is_root() {
            return;
        }
        debug!("yielding to plane 0 with command {:#x}", cmd.as_u64());
        let _ = self.nested.call(CallArgs::new(cmd.as_u64()));
    }

    /// Ask where the shared buffer lives.
    ///
    /// The retrieval mechanism differs by identity and both paths are
    /// deliberately kept distinct: the root plane embeds the sub-command
    /// in a host-call block over the root-privilege call and reads the
    /// address back out of the block; a nested plane issues a direct
    /// nested call and reads the first result register. Either path
    /// returns the reserved null sentinel on any non-success status.
    pub fn shared_buffer_address(&mut self) -> u64 {
        if self.identity.is_root() {
            self.block = HostCallBlock::new(HostCallCmd::GetSharedBuffer);
            let status = self.root.host_call(&mut self.block);
            if status.is_success() { self.block.gprs[0] } else { 0 }
        } else {
            let ret = self
                .nested
                .call(CallArgs::new(HostCallCmd::GetSharedBuffer.as_u64()));
            if ret.is_success() { ret.regs[0] } else { 0 }
        }
    }
}
