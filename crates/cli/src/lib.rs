// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derive initials from free-form names.
//!
//! ```
//! assert_eq!(initials::get_initials("john smith"), "JS");
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod initials;
pub mod logging;
pub mod report;
pub mod text;


pub use diagnostics::{Diagnostic, Diagnostics, Recorder, TracingDiagnostics};
pub use error::{Error, ExitCode, Result};
pub use initials::{Extractor, get_initials, get_initials_with};
pub use text::{trim, upcase};
