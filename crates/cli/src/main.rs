// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdb: run a build and record a compilation database.

mod env;
mod exit_error;
mod intercept;
mod logging;
mod pipeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use crate::exit_error::exit_code_for;

#[derive(Debug, Parser)]
#[command(
    name = "cdb",
    version,
    about = "Run a build and write the compiler invocations to compile_commands.json"
)]
struct Cli {
    /// Database file to write
    #[arg(short, long, value_name = "FILE", default_value = "compile_commands.json")]
    output: PathBuf,

    /// Merge with the existing database instead of replacing it
    #[arg(short, long)]
    append: bool,

    /// Write entries as found, without deduplication or existence checks
    #[arg(short, long)]
    raw: bool,

    /// Also record linker invocations
    #[arg(short, long)]
    link: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Interception library to preload [env: CDB_LIBRARY]
    #[arg(long, value_name = "PATH")]
    library: Option<PathBuf>,

    /// Build command to run
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "BUILD")]
    build: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            let (code, message) = exit_code_for(&e);
            if let Some(message) = message {
                eprintln!("cdb: {message}");
            }
            code
        }
    };
    std::process::exit(code);
}

/// Run the build, then write the database. Returns the build's exit code.
async fn run(cli: Cli) -> Result<i32> {
    let scratch = tempfile::Builder::new()
        .prefix("cdb-")
        .tempdir()
        .context("cannot create scratch directory")?;
    let library = cli.library.unwrap_or_else(env::library);
    let vars = intercept::build_environment(&library, scratch.path());

    let code = intercept::run_build(&cli.build, &vars).await?;

    let options = pipeline::Options {
        output: cli.output,
        append: cli.append,
        raw: cli.raw,
        link: cli.link,
    };
    let output = options.output.clone();
    let trace_dir = scratch.path().to_path_buf();
    let generate = tokio::task::spawn_blocking(move || pipeline::generate(&trace_dir, &options));
    intercept::interruptible(generate)
        .await?
        .context("database writer stopped")?
        .with_context(|| format!("cannot write {}", output.display()))?;
    Ok(code)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
