// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Initials extraction.
//!
//! A name is uppercased, trimmed, and split on runs of whitespace. The result
//! is the first character of the first token, followed by the first character
//! of the last token when there is more than one. Middle tokens are ignored.

use crate::diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
use crate::text::{tokens, trim, upcase};

/// Return the initials for `name`, logging a warning if it is blank.
///
/// ```
/// assert_eq!(initials::get_initials("mary jane watson"), "MW");
/// assert_eq!(initials::get_initials("  madonna  "), "M");
/// assert_eq!(initials::get_initials("   "), "");
/// ```
pub fn get_initials(name: &str) -> String {
    get_initials_with(name, &TracingDiagnostics)
}

/// Return the initials for `name`, reporting a blank name to `diagnostics`.
///
/// The result has at most two characters. A blank name reports
/// [`Diagnostic::EmptyName`] exactly once and yields an empty string.
pub fn get_initials_with(name: &str, diagnostics: &dyn Diagnostics) -> String {
    let cleaned = trim(&upcase(name));

    if cleaned.is_empty() {
        diagnostics.report(Diagnostic::EmptyName);
        return cleaned;
    }

    let mut words = tokens(&cleaned);
    let first = words.next().and_then(|token| token.chars().next());
    let last = words.last().and_then(|token| token.chars().next());

    first.into_iter().chain(last).collect()
}

/// Extracts initials against a fixed diagnostics sink.
#[derive(Debug, Default)]
pub struct Extractor<D = TracingDiagnostics> {
    diagnostics: D,
}

impl<D: Diagnostics> Extractor<D> {
    pub fn new(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    pub fn extract(&self, name: &str) -> String {
        let initials = get_initials_with(name, &self.diagnostics);
        tracing::debug!(name, initials = %initials, "extracted initials");
        initials
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }
}

#[cfg(test)]
#[path = "initials_tests.rs"]
mod tests;
