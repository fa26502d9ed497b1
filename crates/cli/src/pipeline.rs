// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace files in, compilation database out.
//!
//! Runs after the build has finished: every trace file in the scratch
//! directory is parsed, each record is classified and formatted, and the
//! resulting entries are deduplicated (unless raw) and written.

use std::path::{Path, PathBuf};

use cdb_core::{read_trace_file, Entry};
use cdb_storage::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot list trace directory {}: {source}", path.display())]
    TraceDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// How the database is assembled.
#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    /// Merge with the existing database instead of replacing it.
    pub append: bool,
    /// Skip deduplication and the file existence check.
    pub raw: bool,
    /// Keep linker entries.
    pub link: bool,
}

/// What one run produced, for the log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub trace_files: usize,
    pub records: usize,
    pub entries: usize,
    pub written: usize,
}

/// Trace files directly inside `dir`, sorted by file name.
pub fn trace_files(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| PipelineError::TraceDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Parse, classify and format every record found in `files`.
pub fn collect_entries(files: &[PathBuf], link: bool, summary: &mut Summary) -> Vec<Entry> {
    let mut entries = Vec::new();
    for path in files {
        let records = match read_trace_file(path) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping trace file");
                continue;
            }
        };
        summary.trace_files += 1;
        summary.records += records.len();

        for record in &records {
            match cdb_engine::entries_for(record) {
                Ok(formatted) => entries.extend(formatted),
                Err(e) => {
                    tracing::warn!(pid = %record.pid, error = %e, "skipping exec record");
                }
            }
        }
    }

    if !link {
        let before = entries.len();
        entries.retain(|entry| !entry.is_link());
        tracing::debug!(dropped = before - entries.len(), "dropped link entries");
    }
    summary.entries = entries.len();
    entries
}

/// Build the database from the trace files in `trace_dir` and write it.
pub fn generate(trace_dir: &Path, options: &Options) -> Result<Summary, PipelineError> {
    let mut summary = Summary::default();
    let files = trace_files(trace_dir)?;
    let fresh = collect_entries(&files, options.link, &mut summary);

    let prior = if options.append {
        cdb_storage::load(&options.output)?
    } else {
        Vec::new()
    };

    let entries = if options.raw {
        let mut entries = prior;
        entries.extend(fresh);
        entries
    } else {
        let (entries, stats) = cdb_storage::merge(prior, fresh);
        tracing::debug!(
            kept = stats.kept,
            duplicates = stats.duplicates,
            missing = stats.missing,
            "deduplicated entries"
        );
        entries
    };

    cdb_storage::save(&options.output, &entries)?;
    summary.written = entries.len();
    tracing::info!(
        output = %options.output.display(),
        trace_files = summary.trace_files,
        records = summary.records,
        entries = summary.entries,
        written = summary.written,
        "wrote compilation database"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
