// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Realm-side view of the shared data channel.
//!
//! The host owns and allocates the shared buffer; the realm only holds a
//! registered, non-owning reference set up once by external boot code. The
//! realm reads the command and parameters the host posted for a REC and
//! writes response values back.
//!
//! There is no synchronization here. Host and realm never execute
//! concurrently on the same hardware thread for a given context: the
//! boundary-crossing call is the hand-off point, and it is a programming
//! invariant that the writer finishes writing before handing control to
//! the reader.

use arx_abi::shared::{CommandCode, MAX_REC_COUNT, RecSlot, SharedBuffer, clamp_field};
use core::fmt;
use core::ptr::NonNull;
use log::debug;


/// Errors rejecting a shared-buffer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// The registered address was null.
    NullAddress,
    /// The registered address is not aligned for the buffer layout.
    Misaligned,
    /// The registered capacity is zero or exceeds the buffer layout.
    BadCapacity,
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullAddress => write!(f, "shared buffer address is null"),
            Self::Misaligned => write!(f, "shared buffer address is misaligned"),
            Self::BadCapacity => write!(f, "shared buffer capacity out of range"),
        }
    }
}

/// Non-owning realm view of the host-allocated shared buffer.
///
/// Created exactly once per realm by the external registration entry
/// point, which supplies the buffer address and the number of RECs this
/// realm actually runs. Registering a second view without tearing the
/// realm down is caller responsibility and undefined by this layer. The
/// realm never frees this memory.
pub struct RealmChannel {
    buffer: NonNull<SharedBuffer>,
    capacity: usize,
}

impl RealmChannel {
    /// Register the shared buffer the host mapped at `addr`, covering
    /// `capacity` RECs.
    ///
    /// Validation happens once, here: the address must be non-null and
    /// aligned for [`SharedBuffer`], the capacity non-zero and within the
    /// buffer layout.
    ///
    /// # Safety
    ///
    /// `addr` must point to a live [`SharedBuffer`] mapped into this
    /// realm's address space for the remaining lifetime of the test, and
    /// the host must only touch it while this realm is descheduled.
    pub unsafe fn register(addr: u64, capacity: usize) -> Result<Self, RegisterError> {
        let ptr = addr as usize as *mut SharedBuffer;
        let Some(buffer) = NonNull::new(ptr) else {
            return Err(RegisterError::NullAddress);
        };
        if addr & (align_of::<SharedBuffer>() as u64 - 1) != 0 {
            return Err(RegisterError::Misaligned);
        }
        if capacity == 0 || capacity > MAX_REC_COUNT {
            return Err(RegisterError::BadCapacity);
        }
        debug!("shared buffer registered at {addr:#x} for {capacity} RECs");
        Ok(Self { buffer, capacity })
    }

    /// Number of RECs this view covers.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shared reference to the whole buffer.
    fn buffer(&self) -> &SharedBuffer {
        // SAFETY: registration validated the pointer and the caller of
        // `register` guaranteed the mapping outlives this view; scheduling
        // guarantees the host is not writing while the realm runs.
        unsafe { self.buffer.as_ref() }
    }

    /// The record for REC `rec`.
    ///
    /// REC indices are validated: an out-of-range index is a programming
    /// error and aborts instead of returning stale data.
    #[must_use]
    pub fn slot(&self, rec: usize) -> &RecSlot {
        assert!(rec < self.capacity, "REC index {rec} out of range");
        &self.buffer().slots[rec]
    }

    /// The command most recently posted by the host for REC `rec`.
    #[must_use]
    pub fn command(&self, rec: usize) -> CommandCode {
        self.slot(rec).command
    }

    /// Parameter `field` posted by the host for REC `rec`.
    ///
    /// Field indices are lenient: out-of-range fields clamp to the last
    /// valid field.
    #[must_use]
    pub fn host_param(&self, rec: usize, field: usize) -> u64 {
        self.slot(rec).host_params[clamp_field(field)]
    }

    /// Write response value `field` for REC `rec`, read back by the host.
    ///
    /// Same index policy as reads: REC validated, field clamped.
    pub fn set_realm_out(&mut self, rec: usize, field: usize, value: u64) {
        assert!(rec < self.capacity, "REC index {rec} out of range");
        // SAFETY: as in `buffer`; the realm is the only world running
        // while it writes its response fields.
        let buffer = unsafe { self.buffer.as_mut() };
        buffer.slots[rec].realm_out[clamp_field(field)] = value;
    }
}
