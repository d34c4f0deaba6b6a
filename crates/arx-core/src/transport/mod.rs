// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Call-transport abstraction.
//!
//! This module provides the trait seams over the synchronous
//! boundary-crossing call primitives, allowing everything that rides on
//! them to be tested on the host system.


// Mocks require alloc, only available with std or test
#[cfg(any(test, feature = "std"))]
mod mock;
mod traits;

#[cfg(any(test, feature = "std"))]
pub use mock::{MockNestedCall, MockRootCall};
pub use traits::{NestedCall, RootCall};
