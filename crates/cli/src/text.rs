// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Leaf string transforms used to normalize names.
//!
//! Whitespace is the Unicode `White_Space` property plus U+FEFF (byte-order
//! mark), which editors on Windows often leave at the start of a file. Case
//! mapping is the locale-independent Unicode mapping.

/// Whether `c` counts as whitespace for trimming and tokenizing names.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Remove leading and trailing whitespace, leaving interior whitespace as-is.
pub fn trim(value: &str) -> String {
    value.trim_matches(is_whitespace).to_string()
}

/// Split on runs of whitespace, dropping empty tokens.
pub fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_whitespace).filter(|token| !token.is_empty())
}

/// Map every character to its uppercase form.
///
/// Characters without an uppercase form pass through unchanged. Some
/// characters expand (`ß` becomes `SS`), so the result may be longer.
pub fn upcase(value: &str) -> String {
    value.to_uppercase()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
