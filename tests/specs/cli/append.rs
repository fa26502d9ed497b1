// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Merging into an existing database, and raw mode

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn append_twice_adds_nothing() {
    let project = Project::empty();
    project.file("a.c", "").file("b.c", "");
    let trace = project.trace(
        "1",
        &[
            project.exec("", &["cc", "-c", "a.c"]),
            project.exec("", &["cc", "-c", "b.c"]),
        ],
    );

    project.build(&["--append"], &[trace.clone()], 0).passes();
    let once = project.database();
    project.build(&["--append"], &[trace], 0).passes();

    assert_eq!(once.len(), 2);
    assert_eq!(project.database(), once);
}

#[test]
fn append_keeps_prior_entries() {
    let project = Project::empty();
    project.file("a.c", "").file("b.c", "");
    let first = project.trace("1", &[project.exec("", &["cc", "-c", "a.c"])]);
    let second = project.trace("2", &[project.exec("", &["cc", "-c", "b.c"])]);

    project.build(&[], &[first], 0).passes();
    project.build(&["-a"], &[second], 0).passes();

    let files: Vec<_> = project.database().into_iter().map(|e| e.file).collect();
    assert_eq!(files, vec![project.path("a.c"), project.path("b.c")]);
}

#[test]
fn prior_entry_wins_over_rebuilt_duplicate() {
    let project = Project::empty();
    project.file("a.c", "");
    let first = project.trace("1", &[project.exec("", &["gcc", "-c", "a.c"])]);
    let second = project.trace("2", &[project.exec("", &["cc", "-c", "a.c"])]);

    project.build(&[], &[first], 0).passes();
    project.build(&["-a"], &[second], 0).passes();

    let database = project.database();
    assert_eq!(database.len(), 1);
    assert_eq!(database[0].command, "gcc -c a.c");
}

#[test]
fn append_drops_entries_for_deleted_files() {
    let project = Project::empty();
    project.file("a.c", "").file("old.c", "");
    let first = project.trace("1", &[project.exec("", &["cc", "-c", "old.c"])]);
    let second = project.trace("2", &[project.exec("", &["cc", "-c", "a.c"])]);

    project.build(&[], &[first], 0).passes();
    std::fs::remove_file(project.root().join("old.c")).unwrap();
    project.build(&["--append"], &[second], 0).passes();

    let files: Vec<_> = project.database().into_iter().map(|e| e.file).collect();
    assert_eq!(files, vec![project.path("a.c")]);
}

#[test]
fn corrupt_database_is_not_overwritten() {
    let project = Project::empty();
    project.file("a.c", "").file("compile_commands.json", "{ broken");
    let trace = project.trace("1", &[project.exec("", &["cc", "-c", "a.c"])]);

    project
        .build(&["--append"], &[trace], 0)
        .exits(70)
        .stderr_has("malformed compilation database");
    assert_eq!(
        std::fs::read_to_string(project.database_path()).unwrap(),
        "{ broken"
    );
}

#[test]
fn raw_mode_keeps_duplicates_and_missing_files() {
    let project = Project::empty();
    project.file("a.c", "");
    let trace = project.trace(
        "1",
        &[
            project.exec("", &["cc", "-c", "a.c"]),
            project.exec("", &["cc", "-c", "a.c"]),
            project.exec("", &["cc", "-c", "gone.c"]),
        ],
    );

    project.build(&["--raw"], &[trace.clone()], 0).passes();
    assert_eq!(project.database().len(), 3);

    project.build(&[], &[trace], 0).passes();
    assert_eq!(project.database().len(), 1);
}
