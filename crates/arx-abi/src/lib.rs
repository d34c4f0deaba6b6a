// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared ABI definitions between the Arx worlds.
//!
//! This crate defines the contract that crosses every privilege boundary in
//! the conformance runner:
//! - Call-transport argument and result shapes, status codes and the
//!   host-call block format
//! - Plane identifiers and their reserved sentinel
//! - The shared-buffer record layout used by the host/realm data channel
//!
//! # Design Principles
//!
//! - **No dependencies**: Pure data types, 100% host-testable
//! - **Stable layout**: Boundary-crossing types use `#[repr(C)]`
//! - **64-bit only**: Arx targets 64-bit platforms exclusively
//!
//! # Modules
//!
//! - [`call`]: Call-transport request/response shapes and host-call commands
//! - [`plane`]: Plane identity type with the "unknown" sentinel
//! - [`shared`]: Shared-buffer layout (`RecSlot`, `SharedBuffer`)

#![no_std]

pub mod call;
pub mod plane;
pub mod shared;

// Re-export commonly used types at crate root
pub use call::{CALL_ARG_COUNT, CallArgs, CallReturn, CallStatus, HostCallBlock, HostCallCmd};
pub use plane::PlaneId;
pub use shared::{CommandCode, MAX_PARAM_COUNT, MAX_REC_COUNT, RecSlot, SharedBuffer};
