// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup. Everything goes to stderr so the build keeps stdout.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Default level for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `CDB_LOG` wins when it parses; otherwise the `-v` level.
fn filter(verbose: u8) -> EnvFilter {
    if let Some(directive) = env::log_filter() {
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("cdb: ignoring invalid CDB_LOG {directive:?}: {e}"),
        }
    }
    EnvFilter::new(level_for(verbose))
}

pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
