// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of one compiler invocation.

use std::path::{Path, PathBuf};

use cdb_core::ActionKind;
use thiserror::Error;

use crate::cursor::Cursor;
use crate::rules::{find_rule, Halt};
use crate::toolchain;

/// Errors that abort classification of a single invocation.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to read file list {}: {source}", path.display())]
    FileList {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What an invocation does and which files it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub action: ActionKind,
    /// Positional arguments (or `-filelist` contents) in encounter order.
    pub files: Vec<String>,
    /// Value of the last `-o`.
    pub output: Option<String>,
    /// Value of the last `-x`.
    pub language: Option<String>,
    /// The executable is a C++ driver.
    pub is_cxx: bool,
    pub compile_options: Vec<String>,
    pub archs_seen: Vec<String>,
}

impl Classification {
    /// Effective source language: the `-x` override, else the first
    /// recognized source file's extension.
    pub fn source_language(&self) -> Option<&str> {
        self.language.as_deref().or_else(|| {
            self.files
                .iter()
                .find_map(|file| toolchain::language_of(file))
        })
    }
}

/// Classify an argv (`command[0]` is the executable).
///
/// A relative `-filelist` path is read relative to the current directory.
pub fn classify(command: &[String]) -> Result<Classification, ClassifyError> {
    classify_in(Path::new(""), command)
}

/// Classify an argv that ran in `directory`.
pub fn classify_in(directory: &Path, command: &[String]) -> Result<Classification, ClassifyError> {
    let mut state = Classification {
        is_cxx: command.first().is_some_and(|exe| toolchain::is_cxx(exe)),
        ..Classification::default()
    };

    let args = command.get(1..).unwrap_or_default();
    let mut cursor = Cursor::new(args);

    while let Some(token) = cursor.current() {
        let Some(rule) = find_rule(token) else {
            tracing::trace!(token, "unrecognized flag, skipping");
            cursor.skip();
            continue;
        };

        match rule.apply(&mut cursor, &mut state, directory) {
            Ok(()) => {}
            Err(Halt::EndOfArgs) => {
                tracing::debug!(flag = token, rule = rule.name, "flag is missing its value");
                break;
            }
            Err(Halt::Failed(e)) => return Err(e),
        }
    }

    Ok(state)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
