// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use super::{Extraction, ReportFormatter};
use crate::error::Result;

/// Pretty-printed array of `{"name", "initials"}` objects.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write_to(&self, out: &mut dyn Write, rows: &[Extraction]) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, rows)?;
        writeln!(out)?;
        Ok(())
    }
}
