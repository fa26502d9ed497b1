// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdb-core: Core types for the cdb compilation database generator

pub mod action;
pub mod entry;
pub mod path;
pub mod record;

pub use action::ActionKind;
pub use entry::Entry;
pub use path::{absolute, normalize};
pub use record::{parse_trace, read_trace_file, ExecRecord, TraceError};
