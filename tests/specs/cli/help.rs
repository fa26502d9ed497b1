// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn cdb_help_shows_usage() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--append")
        .stdout_has("--library");
}

#[test]
fn cdb_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn cdb_without_build_command_is_usage_error() {
    cli().exits(2).stderr_has("Usage:");
}
