// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: extract initials for each name and print them.

use std::io::{BufRead, Write};

use anyhow::Context;

use initials::cli::Cli;
use initials::config;
use initials::error::ExitCode;
use initials::report::{self, Extraction};
use initials::{Extractor, Recorder, TracingDiagnostics};

/// Run the command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let format = cli.output.unwrap_or(config.output.format);
    let skip_empty = cli.skip_empty || config.output.skip_empty;

    let names = if cli.names.is_empty() {
        read_names(std::io::stdin().lock()).context("failed to read names from stdin")?
    } else {
        cli.names.clone()
    };
    tracing::debug!("processing {} name(s)", names.len());

    let extractor = Extractor::new(Recorder::forwarding(TracingDiagnostics));
    let rows: Vec<Extraction> = names
        .into_iter()
        .map(|name| {
            let initials = extractor.extract(&name);
            Extraction::new(name, initials)
        })
        .filter(|row| !(skip_empty && row.is_empty()))
        .collect();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::formatter(format).write_to(&mut handle, &rows)?;
    handle.flush()?;

    let blank = extractor.diagnostics().count();
    if cli.deny_empty && blank > 0 {
        tracing::debug!("{} blank name(s) with --deny-empty", blank);
        return Ok(ExitCode::EmptyName);
    }
    Ok(ExitCode::Success)
}

/// One name per line. `lines()` already drops `\n` and `\r\n`.
fn read_names(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

#[cfg(test)]
#[path = "cmd_extract_tests.rs"]
mod tests;
