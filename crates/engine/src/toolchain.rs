// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executable and file name patterns for C-family toolchains.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Regex, RegexSet};

/// Compiler drivers, matched against the full executable path.
///
/// - `cc`, `c++`
/// - `gcc`, `g++` (and `mcc`/`m++`), optionally triple-prefixed and versioned
/// - `clang`, `clang++`, optionally triple-prefixed and versioned
/// - `llvm-gcc`, `llvm-g++`
#[allow(clippy::expect_used)]
static COMPILER: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"^([^/]*/)*c(c|\+\+)$",
        r"^([^/]*/)*([^-]*-)*[mg](cc|\+\+)(-\d+(\.\d+){0,2})?$",
        r"^([^/]*/)*([^-]*-)*clang(\+\+)?(-\d+(\.\d+){0,2})?$",
        r"^([^/]*/)*llvm-g(cc|\+\+)$",
    ])
    .expect("constant regex pattern is valid")
});

/// Linkers: `ld`, `ld.bfd`, `ld.gold`, `ld.lld`, `ld64`, `ld64.lld`, `lld`.
#[allow(clippy::expect_used)]
static LINKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/]*/)*([^-]*-)*(ld(\.(bfd|gold|lld))?|ld64(\.lld)?|lld)(-\d+(\.\d+){0,2})?$")
        .expect("constant regex pattern is valid")
});

/// C++ drivers: any name ending in `++`, optionally versioned.
#[allow(clippy::expect_used)]
static CXX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/]*/)*(\w*-)*(\w+\+\+)(-(\d+(\.\d+){0,3}))?$")
        .expect("constant regex pattern is valid")
});

/// Source file extensions and the language each implies.
const SOURCE_EXTENSIONS: &[(&str, &str)] = &[
    ("c", "c"),
    ("i", "c-cpp-output"),
    ("ii", "c++-cpp-output"),
    ("m", "objective-c"),
    ("mi", "objective-c-cpp-output"),
    ("mm", "objective-c++"),
    ("mii", "objective-c++-cpp-output"),
    ("C", "c++"),
    ("cc", "c++"),
    ("CC", "c++"),
    ("cp", "c++"),
    ("cpp", "c++"),
    ("cxx", "c++"),
    ("c++", "c++"),
    ("C++", "c++"),
    ("txx", "c++"),
];

const OBJECT_EXTENSIONS: &[&str] = &["o", "obj"];

pub fn is_compiler(executable: &str) -> bool {
    COMPILER.is_match(executable)
}

pub fn is_linker(executable: &str) -> bool {
    LINKER.is_match(executable)
}

pub fn is_cxx(executable: &str) -> bool {
    CXX.is_match(executable)
}

/// Language implied by a source file's extension (case-sensitive).
pub fn language_of(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?;
    SOURCE_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, language)| *language)
}

pub fn is_source_file(path: &str) -> bool {
    language_of(path).is_some()
}

pub fn is_object_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| OBJECT_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
#[path = "toolchain_tests.rs"]
mod tests;
