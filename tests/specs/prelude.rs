// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for driving the `cdb` binary.
//!
//! The interception library is not available in tests, so builds are
//! simulated with a shell command that copies pre-encoded trace files into
//! `$INTERCEPT_BUILD_TARGET_DIR`, exactly where the library would write.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

pub use cdb_core::{Entry, ExecRecord};
use similar_asserts::assert_eq;

/// A temporary project directory with sources, trace fixtures and the
/// database `cdb` writes.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the project, as a string.
    pub fn path(&self, rel: &str) -> String {
        self.root().join(rel).display().to_string()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// Record `command` as run from `dir` (relative to the project).
    pub fn exec(&self, dir: &str, command: &[&str]) -> ExecRecord {
        ExecRecord {
            pid: "4242".to_string(),
            ppid: "4241".to_string(),
            function: "execve".to_string(),
            directory: self.path(dir).trim_end_matches('/').to_string(),
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Write encoded records to a fixture file outside the scratch
    /// directory and return its path.
    pub fn trace(&self, name: &str, records: &[ExecRecord]) -> PathBuf {
        let content: String = records.iter().map(ExecRecord::encode).collect();
        let path = self.root().join("fixtures").join(name);
        std::fs::create_dir_all(self.root().join("fixtures")).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `cdb` running in the project directory with no interception library.
    pub fn cdb(&self) -> Cli {
        let mut cmd = assert_cmd::Command::new(cdb_binary());
        cmd.current_dir(self.root())
            .env("CDB_LIBRARY", "/nonexistent/libear.so")
            .env_remove("CDB_LOG");
        Cli { cmd }
    }

    /// `cdb <args> -- sh -c 'cp traces... ; exit <code>'`.
    pub fn build(&self, args: &[&str], traces: &[PathBuf], exit: i32) -> Cli {
        let script = format!(r#"for f in "$@"; do cp "$f" "$INTERCEPT_BUILD_TARGET_DIR/"; done; exit {exit}"#);
        let mut command: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        command.extend(["--", "sh", "-c", script.as_str(), "build"].map(String::from));
        command.extend(traces.iter().map(|t| t.display().to_string()));
        let mut cli = self.cdb();
        cli.cmd.args(command);
        cli
    }

    pub fn database_path(&self) -> PathBuf {
        self.root().join("compile_commands.json")
    }

    pub fn database(&self) -> Vec<Entry> {
        let content = std::fs::read_to_string(self.database_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

/// Path to the `cdb` binary, built once per test run.
///
/// The binary belongs to another workspace member, so `cargo test` on this
/// package does not produce it on its own.
fn cdb_binary() -> PathBuf {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY
        .get_or_init(|| {
            let mut build = Command::new(option_env!("CARGO").unwrap_or("cargo"));
            build
                .args(["build", "-p", "cdb", "--bin", "cdb"])
                .current_dir(env!("CARGO_MANIFEST_DIR"));
            if !cfg!(debug_assertions) {
                build.arg("--release");
            }
            let status = build.status().expect("failed to run cargo build");
            assert!(status.success(), "cargo build -p cdb failed");
            assert_cmd::cargo::cargo_bin("cdb")
        })
        .clone()
}

pub fn cli() -> Cli {
    Cli {
        cmd: assert_cmd::Command::new(cdb_binary()),
    }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(expected), "stdout missing {expected:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(expected), "stderr missing {expected:?}:\n{stderr}");
        self
    }
}
