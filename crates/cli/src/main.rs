// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use initials::cli::Cli;
use initials::{Error, ExitCode, logging};

mod cmd_extract;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cmd_extract::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("initials: {e:#}");
            let is_config = e
                .downcast_ref::<Error>()
                .is_some_and(Error::is_config);
            if is_config {
                ExitCode::ConfigError.into()
            } else {
                ExitCode::InternalError.into()
            }
        }
    }
}
