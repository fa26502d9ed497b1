// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation database entries.

use serde::{Deserialize, Serialize};

/// One element of `compile_commands.json`.
///
/// Fields are declared in lexicographic order so serialized keys come out
/// sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Shell-escaped invocation, replayable with a POSIX word splitter.
    pub command: String,
    /// Absolute working directory of the invocation.
    pub directory: String,
    /// Absolute source file (compile entries) or link output (link entries).
    pub file: String,
    /// Absolute object files consumed by a link step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<String>>,
}

impl Entry {
    pub fn compile(directory: impl Into<String>, command: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            directory: directory.into(),
            file: file.into(),
            objects: None,
        }
    }

    pub fn link(
        directory: impl Into<String>,
        command: impl Into<String>,
        file: impl Into<String>,
        objects: Vec<String>,
    ) -> Self {
        Self {
            command: command.into(),
            directory: directory.into(),
            file: file.into(),
            objects: Some(objects),
        }
    }

    pub fn is_link(&self) -> bool {
        self.objects.is_some()
    }

    /// Ordering used when the database is written.
    pub fn sort_key(&self) -> (&str, &str, &str, Option<&[String]>) {
        (&self.file, &self.directory, &self.command, self.objects.as_deref())
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
