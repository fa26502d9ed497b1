// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace file handling

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn malformed_groups_are_skipped() {
    let project = Project::empty();
    project.file("a.c", "");
    let good = project.exec("", &["cc", "-c", "a.c"]).encode();
    let path = project.root().join("fixtures").join("mixed");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, format!("1\x1e2\x1eexecve\x1d\n{good}\n")).unwrap();

    project.build(&[], &[path], 0).passes();
    assert_eq!(project.database().len(), 1);
}

#[test]
fn unreadable_trace_file_is_skipped() {
    let project = Project::empty();
    project.file("a.c", "");
    let good = project.trace("b", &[project.exec("", &["cc", "-c", "a.c"])]);
    let bad = project.root().join("fixtures").join("a");
    std::fs::write(&bad, [0xffu8, 0xfe, 0x1d]).unwrap();

    project
        .build(&["-v"], &[bad, good], 0)
        .passes()
        .stderr_has("skipping trace file");
    assert_eq!(project.database().len(), 1);
}

#[test]
fn filelist_resolved_in_invocation_directory() {
    let project = Project::empty();
    project
        .file("sub/a.c", "")
        .file("sub/b.c", "")
        .file("sub/sources.txt", "a.c\n\nb.c\n");
    let trace = project.trace(
        "1",
        &[project.exec("sub", &["clang", "-c", "-filelist", "sources.txt"])],
    );

    project.build(&[], &[trace], 0).passes();

    let files: Vec<_> = project.database().into_iter().map(|e| e.file).collect();
    assert_eq!(files, vec![project.path("sub/a.c"), project.path("sub/b.c")]);
}
