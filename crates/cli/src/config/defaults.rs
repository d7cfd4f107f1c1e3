// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Current config schema version.
pub const VERSION: u32 = 1;

/// Default output settings.
pub mod output {
    use crate::cli::OutputFormat;

    pub const FORMAT: OutputFormat = OutputFormat::Text;

    /// Blank names still produce a (blank) row unless asked otherwise.
    pub const SKIP_EMPTY: bool = false;
}

/// Default log filter directives.
pub mod log {
    /// Used when neither `--verbose` nor `INITIALS_LOG` is set.
    pub const FILTER: &str = "warn";

    /// Used with `--verbose`.
    pub const VERBOSE_FILTER: &str = "initials=debug,warn";
}
