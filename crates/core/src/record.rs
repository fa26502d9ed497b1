// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exec records written by the interception library.
//!
//! The library appends one group per intercepted process start. Groups are
//! terminated by [`GROUP_SEPARATOR`]; inside a group the five fields (pid,
//! parent pid, hooked function, working directory, argv) are separated by
//! [`FIELD_SEPARATOR`]; argv tokens are each terminated by
//! [`TOKEN_SEPARATOR`], which leaves one empty token after the last split.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// ASCII group separator (0x1d), ends one record.
pub const GROUP_SEPARATOR: char = '\x1d';
/// ASCII record separator (0x1e), between the fields of one record.
pub const FIELD_SEPARATOR: char = '\x1e';
/// ASCII unit separator (0x1f), terminates each argv token.
pub const TOKEN_SEPARATOR: char = '\x1f';

const FIELD_COUNT: usize = 5;

/// Errors reading a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("trace file {} is not valid UTF-8", path.display())]
    Utf8 {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

/// One intercepted process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRecord {
    pub pid: String,
    pub ppid: String,
    /// Name of the hooked exec variant (`execve`, `posix_spawn`, ...).
    pub function: String,
    /// Working directory of the process when it started.
    pub directory: String,
    /// Full argv; `command[0]` is the executable.
    pub command: Vec<String>,
}

impl ExecRecord {
    /// Executable as invoked (`command[0]`).
    pub fn executable(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    /// Arguments after the executable.
    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    /// Encode the record exactly as the interception library writes it.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for field in [&self.pid, &self.ppid, &self.function, &self.directory] {
            out.push_str(field);
            out.push(FIELD_SEPARATOR);
        }
        for token in &self.command {
            out.push_str(token);
            out.push(TOKEN_SEPARATOR);
        }
        out.push(GROUP_SEPARATOR);
        out
    }

    fn parse_group(group: &str) -> Option<ExecRecord> {
        let fields: Vec<&str> = group.split(FIELD_SEPARATOR).collect();
        if fields.len() < FIELD_COUNT {
            tracing::warn!(fields = fields.len(), "skipping trace record with missing fields");
            return None;
        }

        let mut command: Vec<String> = fields[4].split(TOKEN_SEPARATOR).map(str::to_string).collect();
        // Each token is terminated, so the final split is always empty.
        if command.last().is_some_and(String::is_empty) {
            command.pop();
        }

        let record = ExecRecord {
            pid: fields[0].to_string(),
            ppid: fields[1].to_string(),
            function: fields[2].to_string(),
            directory: fields[3].to_string(),
            command,
        };

        if record.directory.is_empty() {
            tracing::warn!(pid = %record.pid, "skipping trace record without a working directory");
            return None;
        }
        if record.command.is_empty() {
            tracing::warn!(pid = %record.pid, "skipping trace record with an empty command");
            return None;
        }
        Some(record)
    }
}

/// Parse every record in `content`, skipping empty and malformed groups.
pub fn parse_trace(content: &str) -> Vec<ExecRecord> {
    content
        .split(GROUP_SEPARATOR)
        .map(|group| group.trim_matches(|c: char| c.is_ascii_whitespace()))
        .filter(|group| !group.is_empty())
        .filter_map(ExecRecord::parse_group)
        .collect()
}

/// Read and parse one trace file.
pub fn read_trace_file(path: &Path) -> Result<Vec<ExecRecord>, TraceError> {
    let bytes = std::fs::read(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| TraceError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_trace(&content))
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
