// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording a build into a fresh database

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn compile_invocation_becomes_entry() {
    let project = Project::empty();
    project.file("src/a.c", "int main(void) { return 0; }\n");
    let a_o = project.path("build/a.o");
    let a_c = project.path("src/a.c");
    let trace = project.trace(
        "1",
        &[project.exec("build", &["gcc", "-c", "-o", &a_o, &a_c])],
    );

    project.build(&[], &[trace], 0).passes();

    assert_eq!(
        project.database(),
        vec![Entry::compile(
            project.path("build").trim_end_matches('/'),
            format!("gcc -c -o {a_o} {a_c}"),
            a_c.clone(),
        )]
    );
}

#[test]
fn link_invocation_recorded_with_link_flag() {
    let project = Project::empty();
    project.file("build/app", "");
    let app = project.path("build/app");
    let a_o = project.path("build/a.o");
    let b_o = project.path("build/b.o");
    let trace = project.trace(
        "1",
        &[project.exec("build", &["ld", "-o", &app, &a_o, &b_o])],
    );

    project.build(&["--link"], &[trace.clone()], 0).passes();
    let database = project.database();
    assert_eq!(database.len(), 1);
    assert_eq!(database[0].file, app);
    assert_eq!(database[0].objects, Some(vec![a_o, b_o]));

    project.build(&[], &[trace], 0).passes();
    assert!(project.database().is_empty());
}

#[test]
fn preprocess_invocation_yields_nothing() {
    let project = Project::empty();
    project.file("a.c", "");
    let trace = project.trace("1", &[project.exec("", &["clang", "-E", "-o", "pre.i", "a.c"])]);

    project.build(&[], &[trace], 0).passes();
    assert!(project.database().is_empty());
}

#[test]
fn spaced_macro_survives_shell_splitting() {
    let project = Project::empty();
    project.file("a.c", "");
    let trace = project.trace(
        "1",
        &[project.exec("", &["cc", "-DNAME=Hello World", "-c", "a.c"])],
    );

    project.build(&[], &[trace], 0).passes();

    let database = project.database();
    assert_eq!(database[0].command, r#"cc "-DNAME=Hello World" -c a.c"#);
}

#[test]
fn entries_are_written_sorted() {
    let project = Project::empty();
    project.file("a.c", "").file("b.c", "").file("c.c", "");
    let first = project.trace("1", &[project.exec("", &["cc", "-c", "c.c"])]);
    let second = project.trace(
        "2",
        &[
            project.exec("", &["cc", "-c", "b.c"]),
            project.exec("", &["cc", "-c", "a.c"]),
        ],
    );

    project.build(&[], &[first, second], 0).passes();

    let files: Vec<_> = project.database().into_iter().map(|e| e.file).collect();
    assert_eq!(files, vec![project.path("a.c"), project.path("b.c"), project.path("c.c")]);
    let raw = std::fs::read_to_string(project.database_path()).unwrap();
    assert!(raw.starts_with("[\n    {\n        \"command\""));
    assert!(raw.ends_with("]\n"));
}

#[test]
fn custom_output_path() {
    let project = Project::empty();
    project.file("a.c", "");
    let trace = project.trace("1", &[project.exec("", &["cc", "-c", "a.c"])]);

    project.build(&["-o", "out/db.json"], &[trace], 0).exits(70);
    std::fs::create_dir(project.root().join("out")).unwrap();
    let trace = project.trace("1", &[project.exec("", &["cc", "-c", "a.c"])]);
    project.build(&["-o", "out/db.json"], &[trace], 0).passes();

    assert!(project.root().join("out/db.json").exists());
    assert!(!project.database_path().exists());
}

#[test]
fn build_exit_code_is_returned() {
    let project = Project::empty();
    let trace = project.trace("1", &[project.exec("", &["make", "all"])]);

    project.build(&[], &[trace], 3).exits(3);
    assert!(project.database().is_empty());
}

#[test]
fn missing_build_command_exits_127() {
    let project = Project::empty();

    project
        .cdb()
        .args(&["--", "/nonexistent/build-tool"])
        .exits(127)
        .stderr_has("/nonexistent/build-tool");
    assert!(!project.database_path().exists());
}

#[test]
fn missing_library_is_reported() {
    let project = Project::empty();
    project
        .cdb()
        .args(&["--", "true"])
        .passes()
        .stderr_has("interception library not found");
}

#[test]
fn verbose_run_logs_summary() {
    let project = Project::empty();
    project.file("a.c", "");
    let trace = project.trace("1", &[project.exec("", &["cc", "-c", "a.c"])]);

    project
        .build(&["-v"], &[trace], 0)
        .passes()
        .stderr_has("wrote compilation database");
}

#[test]
fn log_filter_from_environment() {
    let project = Project::empty();
    let trace = project.trace("1", &[project.exec("", &["make"])]);

    project
        .build(&[], &[trace], 0)
        .env("CDB_LOG", "debug")
        .passes()
        .stderr_has("starting build");
}
