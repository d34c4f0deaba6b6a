// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock call transports for testing.
//!
//! These mocks record every request and replay scripted responses, so that
//! protocol logic can be tested on the host without a privileged callee on
//! the other side of the boundary. Invocation counts are exposed for tests
//! that must prove a code path issued no call at all.

use crate::transport::traits::{NestedCall, RootCall};
use arx_abi::call::{CALL_ARG_COUNT, CallArgs, CallReturn, CallStatus, HostCallBlock};

#[cfg(any(test, feature = "std"))]
use std::{collections::VecDeque, vec::Vec};

#[cfg(not(any(test, feature = "std")))]
use alloc::{collections::VecDeque, vec::Vec};

/// A scripted mock of the nested-call transport.
///
/// Responses are consumed front-to-back from the script; once the script
/// runs dry, the fallback response is replayed indefinitely.
pub struct MockNestedCall {
    calls: Vec<CallArgs>,
    script: VecDeque<CallReturn>,
    fallback: CallReturn,
}

impl MockNestedCall {
    /// Create a mock whose fallback response is success with zeroed
    /// result registers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            script: VecDeque::new(),
            fallback: CallReturn::success([0; CALL_ARG_COUNT]),
        }
    }

    /// Create a mock that fails every request with the given status.
    #[must_use]
    pub fn failing(status: CallStatus) -> Self {
        Self {
            calls: Vec::new(),
            script: VecDeque::new(),
            fallback: CallReturn::failure(status),
        }
    }

    /// Append a response to the script.
    pub fn enqueue(&mut self, response: CallReturn) {
        self.script.push_back(response);
    }

    /// Number of requests issued so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// All recorded requests, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[CallArgs] {
        &self.calls
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_call(&self) -> Option<&CallArgs> {
        self.calls.last()
    }
}

impl Default for MockNestedCall {
    fn default() -> Self {
        Self::new()
    }
}

impl NestedCall for MockNestedCall {
    fn call(&mut self, args: CallArgs) -> CallReturn {
        self.calls.push(args);
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

/// A scripted mock of the root-privilege call transport.
///
/// Register-only requests and host calls keep separate scripts and
/// separate invocation counters. A scripted host-call response carries the
/// GPR values the callee would have written into the block.
pub struct MockRootCall {
    calls: Vec<CallArgs>,
    script: VecDeque<CallReturn>,
    fallback: CallReturn,
    host_calls: Vec<HostCallBlock>,
    host_script: VecDeque<(CallStatus, [u64; CALL_ARG_COUNT])>,
    host_fallback: CallStatus,
}

impl MockRootCall {
    /// Create a mock whose fallbacks are success with zeroed results.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            script: VecDeque::new(),
            fallback: CallReturn::success([0; CALL_ARG_COUNT]),
            host_calls: Vec::new(),
            host_script: VecDeque::new(),
            host_fallback: CallStatus::SUCCESS,
        }
    }

    /// Create a mock that fails every request with the given status.
    #[must_use]
    pub fn failing(status: CallStatus) -> Self {
        Self {
            calls: Vec::new(),
            script: VecDeque::new(),
            fallback: CallReturn::failure(status),
            host_calls: Vec::new(),
            host_script: VecDeque::new(),
            host_fallback: status,
        }
    }

    /// Append a register-only response to the script.
    pub fn enqueue(&mut self, response: CallReturn) {
        self.script.push_back(response);
    }

    /// Append a host-call response: the status plus the GPR values the
    /// callee writes into the block.
    pub fn enqueue_host_call(&mut self, status: CallStatus, gprs: [u64; CALL_ARG_COUNT]) {
        self.host_script.push_back((status, gprs));
    }

    /// Number of register-only requests issued so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Number of host calls issued so far.
    #[must_use]
    pub fn host_call_count(&self) -> usize {
        self.host_calls.len()
    }

    /// All recorded register-only requests, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[CallArgs] {
        &self.calls
    }

    /// All recorded host-call blocks as they looked when issued.
    #[must_use]
    pub fn host_calls(&self) -> &[HostCallBlock] {
        &self.host_calls
    }

    /// The most recent register-only request, if any.
    #[must_use]
    pub fn last_call(&self) -> Option<&CallArgs> {
        self.calls.last()
    }
}

impl Default for MockRootCall {
    fn default() -> Self {
        Self::new()
    }
}

impl RootCall for MockRootCall {
    fn call(&mut self, args: CallArgs) -> CallReturn {
        self.calls.push(args);
        self.script.pop_front().unwrap_or(self.fallback)
    }

    fn host_call(&mut self, block: &mut HostCallBlock) -> CallStatus {
        self.host_calls.push(*block);
        match self.host_script.pop_front() {
            Some((status, gprs)) => {
                block.gprs = gprs;
                status
            }
            None => self.host_fallback,
        }
    }
}
