// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running the build under the interception library.

use std::future::Future;
use std::path::Path;
use std::process::ExitStatus;

use anyhow::Context;

use crate::env;
use crate::exit_error::{ExitError, EXIT_INTERRUPTED, EXIT_SPAWN};

/// Directory the interception library writes trace files into.
pub const TARGET_DIR_VAR: &str = "INTERCEPT_BUILD_TARGET_DIR";

#[cfg(target_os = "macos")]
const PRELOAD_VAR: &str = "DYLD_INSERT_LIBRARIES";
#[cfg(not(target_os = "macos"))]
const PRELOAD_VAR: &str = "LD_PRELOAD";

/// Environment variables that make every exec of the build log a record.
///
/// `existing` is the caller's current preload value; it is kept after the
/// library so tools that already preload something keep working.
pub fn environment(
    library: &Path,
    target_dir: &Path,
    existing: Option<&str>,
) -> Vec<(String, String)> {
    let mut vars = vec![(TARGET_DIR_VAR.to_string(), target_dir.display().to_string())];

    if !library.exists() {
        tracing::warn!(
            library = %library.display(),
            "interception library not found, no commands will be recorded"
        );
        return vars;
    }

    let preload = match existing {
        Some(existing) => format!("{}:{existing}", library.display()),
        None => library.display().to_string(),
    };
    vars.push((PRELOAD_VAR.to_string(), preload));
    if cfg!(target_os = "macos") {
        vars.push(("DYLD_FORCE_FLAT_NAMESPACE".to_string(), "1".to_string()));
    }
    vars
}

/// Run the build to completion and return its exit code.
///
/// Ctrl-C kills the build and surfaces as [`EXIT_INTERRUPTED`].
pub async fn run_build(command: &[String], vars: &[(String, String)]) -> anyhow::Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(ExitError::new(EXIT_SPAWN, "no build command given").into());
    };

    tracing::info!(program = %program, "starting build");
    let mut child = tokio::process::Command::new(program)
        .args(args)
        .envs(vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .spawn()
        .map_err(|e| ExitError::new(EXIT_SPAWN, format!("cannot run {program}: {e}")))?;

    let status = tokio::select! {
        status = child.wait() => Some(status),
        Ok(()) = tokio::signal::ctrl_c() => None,
    };

    match status {
        Some(status) => {
            let status = status.context("waiting for build")?;
            let code = exit_code(status);
            tracing::info!(code, "build finished");
            Ok(code)
        }
        None => {
            tracing::warn!("interrupted, stopping build");
            if let Err(e) = child.kill().await {
                tracing::warn!(error = %e, "failed to kill build");
            }
            Err(ExitError::new(EXIT_INTERRUPTED, "").into())
        }
    }
}

/// Await `work`, giving up with the interrupt exit code on Ctrl-C.
pub async fn interruptible<T>(work: impl Future<Output = T>) -> anyhow::Result<T> {
    tokio::select! {
        value = work => Ok(value),
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted");
            Err(ExitError::new(EXIT_INTERRUPTED, "").into())
        }
    }
}

/// Environment for a build recording into `target_dir`.
pub fn build_environment(library: &Path, target_dir: &Path) -> Vec<(String, String)> {
    environment(library, target_dir, env::preload(PRELOAD_VAR).as_deref())
}

/// Exit code of a finished process; a signal death maps to `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
#[path = "intercept_tests.rs"]
mod tests;
