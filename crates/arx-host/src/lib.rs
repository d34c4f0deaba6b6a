// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Arx Host
//!
//! The host world's side of the test-control substrate:
//! - [`channel`]: ownership of the shared buffer and the host's
//!   command/parameter API over it
//! - [`fuzz`]: the randomized-argument harness that probes the privileged
//!   management interface for argument-preservation violations
//!
//! The host allocates every piece of boundary-crossing memory; realms only
//! ever receive non-owning references to it.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod channel;
pub mod fuzz;

// Re-export commonly used types at crate root
pub use channel::HostChannel;
pub use fuzz::{ArgumentFuzzHarness, EchoResult};
