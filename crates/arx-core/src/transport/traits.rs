// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Call-transport traits.

use arx_abi::call::{CallArgs, CallReturn, CallStatus, HostCallBlock};

/// Synchronous call that crosses into the root-privilege world (SMC-like).
///
/// The call blocks until the other side completes its portion and switches
/// back; there is no non-blocking variant, no cancellation and no timeout
/// at this layer. A call that never returns leaves the caller blocked.
pub trait RootCall {
    /// Issue a register-only request and block until the response arrives.
    fn call(&mut self, args: CallArgs) -> CallReturn;

    /// Issue a host call carrying a [`HostCallBlock`].
    ///
    /// The block's address travels as the call's single argument; the
    /// callee writes response values into `block.gprs` before the call
    /// returns. The returned status alone says whether those values are
    /// meaningful.
    fn host_call(&mut self, block: &mut HostCallBlock) -> CallStatus;
}

/// Synchronous call that crosses into the immediately-enclosing context
/// (HVC-like).
///
/// Shares the request/response shape of [`RootCall`]; only the boundary
/// crossed differs. Used by nested planes to reach their root plane.
pub trait NestedCall {
    /// Issue a register-only request and block until the response arrives.
    fn call(&mut self, args: CallArgs) -> CallReturn;
}
