// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from initials.toml.

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// File name searched for by [`crate::discovery::find_config`].
pub const CONFIG_FILE_NAME: &str = "initials.toml";

/// Parsed initials.toml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version. Only version 1 exists.
    #[serde(default = "Config::default_version")]
    pub version: u32,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub(crate) fn default_version() -> u32 {
        defaults::VERSION
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format: "text" or "json".
    #[serde(default = "OutputConfig::default_format")]
    pub format: OutputFormat,

    /// Omit rows for names that normalize to empty.
    #[serde(default = "OutputConfig::default_skip_empty")]
    pub skip_empty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
            skip_empty: Self::default_skip_empty(),
        }
    }
}

impl OutputConfig {
    pub(crate) fn default_format() -> OutputFormat {
        defaults::output::FORMAT
    }

    pub(crate) fn default_skip_empty() -> bool {
        defaults::output::SKIP_EMPTY
    }
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version != defaults::VERSION {
        return Err(Error::UnsupportedVersion {
            path: path.to_path_buf(),
            version: config.version,
            expected: defaults::VERSION,
        });
    }

    Ok(config)
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Load `explicit` if given, else the discovered config under `start_dir`,
/// else defaults.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => match crate::discovery::find_config(start_dir) {
            Some(path) => load(&path),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Config::default())
            }
        },
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
