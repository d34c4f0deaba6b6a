// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Arx Realm
//!
//! The isolated guest's side of the test-control substrate:
//! - [`channel`]: non-owning view of the shared buffer the host registered
//!   with this realm
//! - [`plane`]: the plane-switch protocol for nested execution contexts
//! - [`host_call`]: exit and query helpers over the root-privilege call
//!
//! Nothing in this crate owns boundary-crossing memory and nothing blocks
//! on its own: every wait happens inside the call transport, and every
//! shared access relies on scheduling as the mutual-exclusion mechanism.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod channel;
pub mod host_call;
pub mod plane;

// Re-export commonly used types at crate root
pub use channel::{RealmChannel, RegisterError};
pub use plane::PlaneSwitch;
