// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cursor over the arguments of one invocation.

use thiserror::Error;

/// Raised when a rule asks for a value past the last argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unexpected end of arguments")]
pub struct EndOfArgs;

/// Forward-only position in an argument list.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    args: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self { args, pos: 0 }
    }

    /// Argument under the cursor, `None` once exhausted.
    pub fn current(&self) -> Option<&'a str> {
        self.args.get(self.pos).map(String::as_str)
    }

    /// Move to the next argument and return it.
    ///
    /// At the last argument this exhausts the cursor and returns
    /// [`EndOfArgs`], so a flag missing its value is never re-read.
    pub fn advance(&mut self) -> Result<&'a str, EndOfArgs> {
        self.pos = (self.pos + 1).min(self.args.len());
        self.current().ok_or(EndOfArgs)
    }

    /// Step past the argument under the cursor.
    pub fn skip(&mut self) {
        self.pos = (self.pos + 1).min(self.args.len());
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.args.len()
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
