// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the cdb binary.

use std::path::PathBuf;

/// Built-in location of the interception library.
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY: &str = "/usr/local/lib/libear.dylib";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_LIBRARY: &str = "/usr/local/lib/libear.so";

/// Interception library: CDB_LIBRARY > built-in default
pub fn library() -> PathBuf {
    non_empty("CDB_LIBRARY")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY))
}

/// Log filter directive from `CDB_LOG`, overriding `-v`.
pub fn log_filter() -> Option<String> {
    non_empty("CDB_LOG")
}

/// Current value of a preload variable, to be kept behind the library.
pub fn preload(var: &str) -> Option<String> {
    non_empty(var)
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
