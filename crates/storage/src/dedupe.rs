// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry identity and duplicate filtering.

use std::collections::HashSet;
use std::path::Path;

use cdb_core::Entry;
use sha2::{Digest, Sha256};

/// Counts reported by [`dedupe`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupeStats {
    pub kept: usize,
    pub duplicates: usize,
    /// Entries dropped because their file is gone.
    pub missing: usize,
}

/// Stable identity of an entry, as SHA-256 hex.
///
/// Built from the file, the directory and the command without its
/// executable, so a driver wrapper and the compiler it execs collapse
/// into one entry.
pub fn identity(entry: &Entry) -> String {
    let canonical = format!(
        "{}\0{}\0{}",
        entry.file,
        entry.directory,
        arguments_of(&entry.command)
    );
    format!("{:x}", Sha256::digest(canonical.as_bytes()))
}

/// The command string with its first word removed.
fn arguments_of(command: &str) -> String {
    match cdb_shell::split(command) {
        Ok(words) => cdb_shell::join(words.iter().skip(1)),
        Err(e) => {
            tracing::debug!(command, error = %e, "unsplittable command, cutting at whitespace");
            command
                .trim_start()
                .split_once(char::is_whitespace)
                .map(|(_, rest)| rest.trim_start().to_string())
                .unwrap_or_default()
        }
    }
}

/// Drop duplicate entries and entries whose file no longer exists.
///
/// The first occurrence of an identity wins, so callers put the entries
/// that should take precedence first.
pub fn dedupe(entries: impl IntoIterator<Item = Entry>) -> (Vec<Entry>, DedupeStats) {
    let mut seen = HashSet::new();
    let mut stats = DedupeStats::default();
    let mut kept = Vec::new();

    for entry in entries {
        if !Path::new(&entry.file).exists() {
            tracing::debug!(file = %entry.file, "dropping entry for missing file");
            stats.missing += 1;
            continue;
        }
        if !seen.insert(identity(&entry)) {
            tracing::trace!(file = %entry.file, "dropping duplicate entry");
            stats.duplicates += 1;
            continue;
        }
        kept.push(entry);
    }

    stats.kept = kept.len();
    (kept, stats)
}

/// Dedupe a prior database followed by freshly produced entries.
pub fn merge(prior: Vec<Entry>, fresh: Vec<Entry>) -> (Vec<Entry>, DedupeStats) {
    dedupe(prior.into_iter().chain(fresh))
}

#[cfg(test)]
#[path = "dedupe_tests.rs"]
mod tests;
