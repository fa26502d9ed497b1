// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdb-engine: Compiler command-line classification and entry formatting.
//!
//! [`classify`] walks an argv with an ordered rule table and reports what
//! the invocation does; [`format`] turns a classified exec record into
//! compilation database entries.

mod classify;
mod cursor;
mod format;
mod rules;
pub mod toolchain;

pub use classify::{classify, classify_in, Classification, ClassifyError};
pub use cursor::{Cursor, EndOfArgs};
pub use format::{entries_for, format};
pub use rules::{find_rule, Rule};
