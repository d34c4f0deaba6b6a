// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Arx Core
//!
//! World-agnostic pieces of the test-control substrate:
//! - The call-transport trait seams every boundary-crossing component rides
//!   on, plus scripted mocks for host tests
//! - The fault-injection exception registries that let a test install a
//!   handler, provoke a trap and decide whether execution resumes
//!
//! Everything here runs identically in the host world, the realm and any
//! nested plane; the world-specific crates (`arx-host`, `arx-realm`) build
//! on top of it.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod faults;
pub mod transport;

/// Crate version.
pub const VERSION: &str = match option_env!("ARX_VERSION") {
    Some(v) => v,
    None => "unknown",
};

// Re-export commonly used types at crate root
pub use faults::{INSTRUCTION_WIDTH, ReturnState, SErrorExceptions, SyncExceptions};
pub use transport::{NestedCall, RootCall};
