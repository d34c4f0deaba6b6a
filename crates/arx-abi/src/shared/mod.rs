// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared-buffer layout for the host/realm data channel.
//!
//! The host allocates one [`SharedBuffer`] per realm and maps it into the
//! realm's address space. Each schedulable execution context (REC) owns one
//! [`RecSlot`]: the host posts a command and parameters into it before
//! scheduling the context, and the realm writes response values back before
//! yielding. Scheduling is the only synchronization - whichever world is
//! running has exclusive access.
//!
//! # Index Policy
//!
//! - REC indices are validated everywhere: an out-of-range REC index is a
//!   programming error and must fail loudly, never return stale data.
//! - Parameter *field* indices are lenient: an out-of-range field clamps to
//!   the last valid field instead of failing. This read policy is part of
//!   the channel contract and applies to field writes as well.

use core::fmt;

/// Number of REC slots in a shared buffer.
pub const MAX_REC_COUNT: usize = 8;

/// Number of parameter fields per direction in a REC slot.
pub const MAX_PARAM_COUNT: usize = 6;

/// Clamp a parameter field index to the valid range.
///
/// Out-of-range fields map to the last valid field. This is the one place
/// the lenient field policy is implemented; both channel sides go through
/// it.
#[inline]
#[must_use]
pub const fn clamp_field(field: usize) -> usize {
    if field >= MAX_PARAM_COUNT {
        MAX_PARAM_COUNT - 1
    } else {
        field
    }
}

// =============================================================================
// Command Codes
// =============================================================================

/// Command posted by the host into a REC slot.
///
/// The catalogue of commands belongs to the feature tests; the channel
/// treats the code as opaque. Zero means "no command posted".
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct CommandCode(u8);

impl CommandCode {
    /// No command posted.
    pub const NONE: Self = Self(0);

    /// Create a command code from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the raw command value.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns true if no command has been posted.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl fmt::Debug for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandCode({:#x})", self.0)
    }
}

// =============================================================================
// Records
// =============================================================================

/// Per-context record in the shared buffer.
///
/// `host_params` is written by the host and read by the realm; `realm_out`
/// is written by the realm and read by the host. The command code travels
/// host to realm.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct RecSlot {
    /// Command most recently posted by the host.
    pub command: CommandCode,
    /// Parameters host -> realm.
    pub host_params: [u64; MAX_PARAM_COUNT],
    /// Response values realm -> host.
    pub realm_out: [u64; MAX_PARAM_COUNT],
}

impl RecSlot {
    /// A slot with no command and zeroed parameters.
    pub const EMPTY: Self = Self {
        command: CommandCode::NONE,
        host_params: [0; MAX_PARAM_COUNT],
        realm_out: [0; MAX_PARAM_COUNT],
    };
}

impl Default for RecSlot {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The full buffer shared between host and realm.
///
/// One slot per REC, indexed by REC number. The host owns the allocation;
/// the realm holds a non-owning registered reference. Nothing frees this
/// memory during a test's lifetime.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct SharedBuffer {
    /// Per-REC records, indexed by REC number.
    pub slots: [RecSlot; MAX_REC_COUNT],
}

impl SharedBuffer {
    /// Create an empty buffer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [RecSlot::EMPTY; MAX_REC_COUNT],
        }
    }

    /// Number of REC slots.
    #[inline]
    #[must_use]
    pub const fn capacity() -> usize {
        MAX_REC_COUNT
    }
}

impl Default for SharedBuffer {
    fn default() -> Self {
        Self::new()
    }
}
