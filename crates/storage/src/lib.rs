// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdb-storage: Compilation database persistence and deduplication.

mod database;
mod dedupe;

pub use database::{load, save, DatabaseError};
pub use dedupe::{dedupe, identity, merge, DedupeStats};
