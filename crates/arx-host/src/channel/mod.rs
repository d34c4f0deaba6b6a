// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Host-side ownership of the shared data channel.
//!
//! The host allocates the shared buffer, posts commands and parameters
//! into per-REC slots before scheduling a realm context, and reads the
//! responses the realm wrote back after it yields. The realm only ever
//! holds a registered, non-owning view of this allocation; nothing frees
//! it during a test's lifetime.
//!
//! Index policy matches the realm side: REC indices are validated and
//! abort when out of range, parameter field indices clamp to the last
//! valid field.

use arx_abi::shared::{
    CommandCode, MAX_PARAM_COUNT, MAX_REC_COUNT, RecSlot, SharedBuffer, clamp_field,
};
use log::debug;

#[cfg(any(test, feature = "std"))]
use std::boxed::Box;

#[cfg(not(any(test, feature = "std")))]
use alloc::boxed::Box;


/// Owning host view of the shared buffer.
///
/// `capacity` is the number of RECs the test actually created; the
/// allocation always carries the full layout, but indexing beyond the
/// capacity is a programming error.
pub struct HostChannel {
    buffer: Box<SharedBuffer>,
    capacity: usize,
}

impl HostChannel {
    /// Allocate an empty shared buffer covering `capacity` RECs.
    ///
    /// A capacity of zero or beyond the buffer layout is a programming
    /// error and aborts.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(
            (1..=MAX_REC_COUNT).contains(&capacity),
            "REC capacity {capacity} out of range"
        );
        debug!("allocating shared buffer for {capacity} RECs");
        Self {
            buffer: Box::new(SharedBuffer::new()),
            capacity,
        }
    }

    /// Number of RECs this channel covers.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The buffer's address, for hand-off to the realm's registration.
    ///
    /// The allocation stays alive (and stays put) for as long as this
    /// channel exists; realm views registered against this address must
    /// not outlive it.
    #[must_use]
    pub fn buffer_address(&self) -> u64 {
        core::ptr::from_ref(self.buffer.as_ref()) as usize as u64
    }

    /// The record for REC `rec`.
    ///
    /// REC indices are validated: an out-of-range index is a programming
    /// error and aborts instead of returning stale data.
    #[must_use]
    pub fn slot(&self, rec: usize) -> &RecSlot {
        assert!(rec < self.capacity, "REC index {rec} out of range");
        &self.buffer.slots[rec]
    }

    /// Post a command for REC `rec`.
    pub fn set_command(&mut self, rec: usize, cmd: CommandCode) {
        assert!(rec < self.capacity, "REC index {rec} out of range");
        self.buffer.slots[rec].command = cmd;
    }

    /// Post parameter `field` for REC `rec`. Field indices clamp.
    pub fn set_host_param(&mut self, rec: usize, field: usize, value: u64) {
        assert!(rec < self.capacity, "REC index {rec} out of range");
        self.buffer.slots[rec].host_params[clamp_field(field)] = value;
    }

    /// Read back parameter `field` posted for REC `rec`. Field indices
    /// clamp.
    #[must_use]
    pub fn host_param(&self, rec: usize, field: usize) -> u64 {
        self.slot(rec).host_params[clamp_field(field)]
    }

    /// Response value `field` the realm wrote for REC `rec`. Field
    /// indices clamp.
    #[must_use]
    pub fn realm_out(&self, rec: usize, field: usize) -> u64 {
        self.slot(rec).realm_out[clamp_field(field)]
    }

    /// Zero the parameters posted for REC `rec`.
    pub fn clear_host_params(&mut self, rec: usize) {
        assert!(rec < self.capacity, "REC index {rec} out of range");
        self.buffer.slots[rec].host_params = [0; MAX_PARAM_COUNT];
    }

    /// Zero every REC's response values, across the whole buffer.
    ///
    /// Done before a fresh run so stale realm output can never be
    /// mistaken for a response to the new command.
    pub fn clear_realm_out(&mut self) {
        for slot in &mut self.buffer.slots {
            slot.realm_out = [0; MAX_PARAM_COUNT];
        }
    }
}
