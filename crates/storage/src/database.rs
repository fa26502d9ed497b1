// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading and writing `compile_commands.json`.
//!
//! The file is a JSON array of [`Entry`] values. Writes are sorted and
//! indented so identical builds produce byte-identical files.

use std::io;
use std::path::{Path, PathBuf};

use cdb_core::Entry;
use serde::Serialize;
use thiserror::Error;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed compilation database {}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
}

/// Load a database, treating a missing file as empty.
pub fn load(path: &Path) -> Result<Vec<Entry>, DatabaseError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no prior database");
            return Ok(Vec::new());
        }
        Err(source) => return Err(DatabaseError::Read { path: path.to_path_buf(), source }),
    };
    let entries: Vec<Entry> = serde_json::from_str(&content)
        .map_err(|source| DatabaseError::Json { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded prior database");
    Ok(entries)
}

/// Write entries sorted, 4-space indented, with a trailing newline.
///
/// The file is written next to `path` and renamed into place, so readers
/// never observe a half-written database.
pub fn save(path: &Path, entries: &[Entry]) -> Result<(), DatabaseError> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    sorted
        .serialize(&mut ser)
        .map_err(|source| DatabaseError::Json { path: path.to_path_buf(), source })?;
    buf.push(b'\n');

    let tmp_path = tmp_path(path);
    let write = || -> io::Result<()> {
        std::fs::write(&tmp_path, &buf)?;
        std::fs::rename(&tmp_path, path)
    };
    if let Err(source) = write() {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(DatabaseError::Write { path: path.to_path_buf(), source });
    }
    tracing::debug!(path = %path.display(), count = sorted.len(), "wrote database");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
#[path = "database_tests.rs"]
mod tests;
