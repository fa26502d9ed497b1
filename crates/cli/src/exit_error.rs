// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! The orchestrator returns `ExitError` instead of calling
//! `std::process::exit()` directly, allowing `main()` to drop the scratch
//! directory and flush logs before the process terminates.

use std::fmt;

/// Unexpected failure inside cdb itself (`EX_SOFTWARE`).
pub const EXIT_INTERNAL: i32 = 70;
/// The build command could not be started.
pub const EXIT_SPAWN: i32 = 127;
/// Interrupted by Ctrl-C.
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Map a command error to the process exit code and the message to print.
pub fn exit_code_for(err: &anyhow::Error) -> (i32, Option<String>) {
    match err.downcast_ref::<ExitError>() {
        Some(exit) if exit.message.is_empty() => (exit.code, None),
        Some(exit) => (exit.code, Some(exit.message.clone())),
        None => (EXIT_INTERNAL, Some(format!("{err:#}"))),
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
