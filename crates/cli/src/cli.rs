//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

/// Derive one- or two-letter initials from names
#[derive(Parser, Debug)]
#[command(name = "initials")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Names to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Output format [default: text, or output.format from config]
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Omit names that are blank after trimming
    #[arg(long)]
    pub skip_empty: bool,

    /// Exit with code 1 if any name is blank
    #[arg(long)]
    pub deny_empty: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "INITIALS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
