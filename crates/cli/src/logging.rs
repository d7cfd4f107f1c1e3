// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout carries only results. `INITIALS_LOG` takes
//! `EnvFilter` directives and wins over `--verbose`.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::defaults;

/// Environment variable holding log filter directives.
pub const LOG_ENV: &str = "INITIALS_LOG";

/// Filter used when `INITIALS_LOG` is unset or invalid.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        defaults::log::VERBOSE_FILTER
    } else {
        defaults::log::FILTER
    }
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
