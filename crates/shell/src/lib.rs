// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdb-shell: POSIX word splitting and quoting for recorded command lines.
//!
//! Compilation database consumers split the `command` string into argv
//! with POSIX quoting rules and no expansion. [`join`] produces such
//! strings; [`split`] is the matching splitter.

mod error;
mod lexer;
mod quote;
mod span;

pub use error::LexerError;
pub use lexer::{split, Lexer, Word};
pub use quote::{join, quote};
pub use span::Span;
