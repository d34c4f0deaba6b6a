// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Call-transport request/response shapes.
//!
//! The call transport is the synchronous, blocking primitive that crosses a
//! privilege boundary. Two flavors exist - the root-privilege call and the
//! nested call - distinguished only by which boundary they cross; both share
//! the shapes defined here. The transport itself is external: this crate
//! only defines what travels across it.
//!
//! # Register Layout
//!
//! A request occupies the function-identifier register plus up to
//! [`CALL_ARG_COUNT`] argument registers:
//!
//! | Register | Content |
//! |----------|---------|
//! | x0 | function identifier |
//! | x1..x7 | arguments (zero when unused) |
//!
//! A response carries a primary status register plus [`CALL_ARG_COUNT`]
//! result registers aligned 1:1 with the argument registers, so that
//! argument-preservation checks can compare every position:
//!
//! | Register | Content |
//! |----------|---------|
//! | x0 | [`CallStatus`] |
//! | x1..x7 | results |

use core::fmt;

/// Number of argument registers after the function identifier.
///
/// Result registers use the same count so that position `i` of a request
/// can be compared against position `i` of the response.
pub const CALL_ARG_COUNT: usize = 7;

// =============================================================================
// Function Identifiers
// =============================================================================

/// Function identifiers carried in the first request register.
///
/// Nested-call requests carry a [`HostCallCmd`] value instead; the two
/// namespaces never overlap.
pub mod fid {
    /// Root-privilege host call. The single argument is the address of a
    /// [`HostCallBlock`](super::HostCallBlock) that carries the sub-command
    /// and receives results.
    pub const HOST_CALL: u64 = 0xC400_0199;

    /// Root-privilege ABI version query.
    pub const ABI_VERSION: u64 = 0xC400_0190;
}

// =============================================================================
// Status
// =============================================================================

/// Primary status code of a call-transport response.
///
/// A single reserved value denotes success; every other value denotes
/// failure and carries no further structured information at this layer.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct CallStatus(u64);

impl CallStatus {
    /// The one reserved success value.
    pub const SUCCESS: Self = Self(0);

    /// Wrap a raw status register value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw status register value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns true if this is the reserved success value.
    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }
}

impl fmt::Debug for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(f, "CallStatus(SUCCESS)")
        } else {
            write!(f, "CallStatus({:#x})", self.0)
        }
    }
}

// =============================================================================
// Request / Response
// =============================================================================

/// A call-transport request: function identifier plus argument registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallArgs {
    /// Function identifier (first request register).
    pub fid: u64,
    /// Argument registers; unused positions stay zero.
    pub args: [u64; CALL_ARG_COUNT],
}

impl CallArgs {
    /// Create a request with no arguments.
    #[inline]
    #[must_use]
    pub const fn new(fid: u64) -> Self {
        Self {
            fid,
            args: [0; CALL_ARG_COUNT],
        }
    }

    /// Create a request with a full argument vector.
    #[inline]
    #[must_use]
    pub const fn with_args(fid: u64, args: [u64; CALL_ARG_COUNT]) -> Self {
        Self { fid, args }
    }
}

/// A call-transport response: primary status plus result registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallReturn {
    /// Primary status register.
    pub status: CallStatus,
    /// Result registers, aligned 1:1 with the request's argument registers.
    pub regs: [u64; CALL_ARG_COUNT],
}

impl CallReturn {
    /// Create a successful response carrying result registers.
    #[inline]
    #[must_use]
    pub const fn success(regs: [u64; CALL_ARG_COUNT]) -> Self {
        Self {
            status: CallStatus::SUCCESS,
            regs,
        }
    }

    /// Create a failure response. Result registers are zero; callers must
    /// not read them on failure.
    #[inline]
    #[must_use]
    pub const fn failure(status: CallStatus) -> Self {
        Self {
            status,
            regs: [0; CALL_ARG_COUNT],
        }
    }

    /// Returns true if the primary status is the reserved success value.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

// =============================================================================
// Host-Call Block
// =============================================================================

/// Sub-commands of the root-privilege host call.
///
/// The same values double as nested-call function identifiers: a plane that
/// cannot reach the host directly issues the command to its root plane
/// instead, which forwards or answers it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum HostCallCmd {
    /// Request the address of the shared buffer.
    GetSharedBuffer = 1,
    /// Yield with a passing verdict for the issuing context.
    ExitSuccess = 2,
    /// Yield with a failing verdict for the issuing context.
    ExitFailed = 3,
    /// Ask the host to flush the issuing context's log output.
    PrintRequest = 4,
    /// Query the issuing context's plane identity.
    GetPlaneId = 5,
}

impl HostCallCmd {
    /// Try to convert from a raw u64 value.
    #[must_use]
    pub const fn from_u64(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::GetSharedBuffer),
            2 => Some(Self::ExitSuccess),
            3 => Some(Self::ExitFailed),
            4 => Some(Self::PrintRequest),
            5 => Some(Self::GetPlaneId),
            _ => None,
        }
    }

    /// Get the raw command value (also the nested-call function identifier).
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self as u64
    }

    /// Returns true if this command yields control back permanently
    /// (the issuing context does not expect to be resumed after it).
    #[inline]
    #[must_use]
    pub const fn is_exit(self) -> bool {
        matches!(self, Self::ExitSuccess | Self::ExitFailed)
    }
}

/// In-memory block carried by the root-privilege host call.
///
/// The caller writes the sub-command into `imm` (and any request payload
/// into `gprs`), passes the block's address as the call's single argument,
/// and the callee writes response values back into `gprs` before the call
/// returns. The block must stay in memory the callee can reach for the
/// duration of the call.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct HostCallBlock {
    /// Sub-command, as a raw [`HostCallCmd`] value.
    pub imm: u64,
    /// Request payload on the way in, response values on the way out.
    pub gprs: [u64; CALL_ARG_COUNT],
}

impl HostCallBlock {
    /// Create a block for the given sub-command with a zeroed payload.
    #[inline]
    #[must_use]
    pub const fn new(cmd: HostCallCmd) -> Self {
        Self {
            imm: cmd.as_u64(),
            gprs: [0; CALL_ARG_COUNT],
        }
    }

    /// The block's address, as passed in the call's argument register.
    #[inline]
    #[must_use]
    pub fn address(&self) -> u64 {
        core::ptr::from_ref(self) as usize as u64
    }
}
