// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical path resolution.
//!
//! Paths are never canonicalized through the filesystem: symlinks stay as
//! the build spelled them.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `directory` (unless already absolute) and normalize.
pub fn absolute(directory: impl AsRef<Path>, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(directory.as_ref().join(path))
    }
}

/// Collapse `.`, `..` and redundant separators without touching the filesystem.
///
/// `..` at the root is dropped (`/..` is `/`); leading `..` of a relative
/// path is kept.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_with_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if ends_with_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
