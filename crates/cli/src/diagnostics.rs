// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal diagnostics raised while extracting initials.
//!
//! Extraction never fails. Conditions worth an operator's attention are
//! handed to a [`Diagnostics`] sink instead, so callers decide where they go:
//! the default sink logs through `tracing`, the [`Recorder`] keeps them in
//! memory.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A recognized non-fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The name was empty after trimming and uppercasing.
    EmptyName,
}

impl Diagnostic {
    /// Human-readable description of the condition.
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::EmptyName => "empty name passed to get_initials",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receiver for diagnostics.
pub trait Diagnostics {
    fn report(&self, diagnostic: Diagnostic);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Logs each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(?diagnostic, "{}", diagnostic);
    }
}

/// Keeps every reported diagnostic in memory.
///
/// Optionally forwards to another sink, so the CLI can both count empty
/// names and still log them.
#[derive(Debug, Default)]
pub struct Recorder<D = Discard> {
    seen: Mutex<Vec<Diagnostic>>,
    forward: D,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Diagnostics> Recorder<D> {
    /// Record diagnostics and also pass them on to `forward`.
    pub fn forwarding(forward: D) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            forward,
        }
    }

    /// Snapshot of everything reported so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<D: Diagnostics> Diagnostics for Recorder<D> {
    fn report(&self, diagnostic: Diagnostic) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
        self.forward.report(diagnostic);
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Diagnostics for Discard {
    fn report(&self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
