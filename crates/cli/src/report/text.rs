// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use super::{Extraction, ReportFormatter};
use crate::error::Result;

/// One line of initials per row. Blank names print a blank line.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_to(&self, out: &mut dyn Write, rows: &[Extraction]) -> Result<()> {
        for row in rows {
            writeln!(out, "{}", row.initials)?;
        }
        Ok(())
    }
}
