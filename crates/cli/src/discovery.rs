// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locate initials.toml for the current invocation.
//!
//! The search covers `start_dir` and its ancestors, and never leaves the
//! enclosing git repository.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

/// Nearest initials.toml at or above `start_dir`, up to and including the
/// git root (the first ancestor holding `.git`).
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!("found config at {}", candidate.display());
            return Some(candidate);
        }
        if is_git_root(dir) {
            break;
        }
    }
    None
}

fn is_git_root(dir: &Path) -> bool {
    dir.join(".git").exists()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
