// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of extraction results.
//!
//! Rows are written as plain text (one line per name) or as a JSON array.

mod json;
mod text;

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One processed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// The name exactly as given.
    pub name: String,
    /// Derived initials; empty for blank names.
    pub initials: String,
}

impl Extraction {
    pub fn new(name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initials: initials.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.initials.is_empty()
    }
}

/// Writes a batch of extractions in one output format.
pub trait ReportFormatter {
    fn write_to(&self, out: &mut dyn Write, rows: &[Extraction]) -> Result<()>;
}

/// Formatter for the chosen output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Render `rows` into a string. Mostly useful for tests and callers that
/// don't stream.
pub fn format_report(format: OutputFormat, rows: &[Extraction]) -> Result<String> {
    let mut buf = Vec::new();
    formatter(format).write_to(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
