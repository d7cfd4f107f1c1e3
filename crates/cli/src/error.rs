// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors raised outside the extraction core (config loading, output).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {version} in {} (expected {expected})", .path.display())]
    UnsupportedVersion {
        path: PathBuf,
        version: u32,
        expected: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from loading configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::ConfigRead { .. } | Error::ConfigParse { .. } | Error::UnsupportedVersion { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All names processed.
    Success = 0,
    /// At least one name was blank and `--deny-empty` was set.
    EmptyName = 1,
    /// Config could not be loaded. Shared with clap's usage-error code.
    ConfigError = 2,
    /// Anything else (I/O on stdin/stdout, serialization).
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
