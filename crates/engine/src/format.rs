// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning classified exec records into database entries.

use std::path::Path;

use cdb_core::{absolute, ActionKind, Entry, ExecRecord};

use crate::classify::{classify_in, Classification, ClassifyError};
use crate::toolchain;

/// Output a linker writes when no `-o` is given.
const DEFAULT_LINK_OUTPUT: &str = "a.out";

/// Build the entries one classified invocation contributes.
///
/// - A linker in link mode yields one entry for its output, listing the
///   object files it consumed.
/// - A compiler in compile mode yields one entry per source file.
/// - Everything else yields nothing.
pub fn format(record: &ExecRecord, classification: &Classification) -> Vec<Entry> {
    let executable = record.executable();
    let resolve = |path: &str| absolute(&record.directory, path).to_string_lossy().into_owned();

    if toolchain::is_linker(executable) && classification.action == ActionKind::Link {
        let output = classification
            .output
            .as_deref()
            .unwrap_or(DEFAULT_LINK_OUTPUT);
        let objects = classification
            .files
            .iter()
            .filter(|file| toolchain::is_object_file(file))
            .map(|file| resolve(file))
            .collect();
        return vec![Entry::link(
            record.directory.clone(),
            cdb_shell::join(&record.command),
            resolve(output),
            objects,
        )];
    }

    if toolchain::is_compiler(executable) && classification.action == ActionKind::Compile {
        let command = cdb_shell::join(&record.command);
        return classification
            .files
            .iter()
            .filter(|file| toolchain::is_source_file(file))
            .map(|file| Entry::compile(record.directory.clone(), command.clone(), resolve(file)))
            .collect();
    }

    tracing::trace!(
        executable,
        action = %classification.action,
        "invocation contributes no entries"
    );
    Vec::new()
}

/// Classify a record in its own working directory and format it.
pub fn entries_for(record: &ExecRecord) -> Result<Vec<Entry>, ClassifyError> {
    let classification = classify_in(Path::new(&record.directory), &record.command)?;
    Ok(format(record, &classification))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
