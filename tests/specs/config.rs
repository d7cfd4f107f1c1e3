//! Behavior tests for initials.toml.
//!
//! Tests that initials correctly handles:
//! - Discovered and explicit config files
//! - CLI flags overriding config
//! - Unknown keys and bad versions (errors, exit code 2)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// CONFIG LOADING SPECS
// =============================================================================

/// > Valid config produces no errors
#[test]
fn valid_config_no_errors() {
    let temp = Project::with_config(MINIMAL_CONFIG);
    initials_cmd()
        .arg("ada")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("A\n")
        .stderr(predicates::str::is_empty());
}

/// > output.format from a discovered config sets the default format
#[test]
fn discovered_config_sets_format() {
    let temp = Project::with_config("version = 1\n\n[output]\nformat = \"json\"\n");
    temp.file("sub/dir/.keep", "");
    initials_cmd()
        .arg("ada")
        .current_dir(temp.path().join("sub/dir"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("["));
}

/// > CLI --output overrides config
#[test]
fn cli_output_overrides_config() {
    let temp = Project::with_config("[output]\nformat = \"json\"\n");
    initials_cmd()
        .args(["-o", "text", "ada"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("A\n");
}

/// > output.skip_empty drops blank names
#[test]
fn config_skip_empty() {
    let temp = Project::with_config("[output]\nskip_empty = true\n");
    initials_cmd()
        .args(["", "ada"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("A\n");
}

/// > --config loads an explicit file
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("custom.toml", "[output]\nformat = \"json\"\n");
    initials_cmd()
        .args(["-C", "custom.toml", "ada"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\"initials\": \"A\""));
}

/// > INITIALS_CONFIG names the config file
#[test]
fn config_env_var() {
    let temp = Project::empty();
    temp.file("env.toml", "[output]\nformat = \"json\"\n");
    initials_cmd()
        .env("INITIALS_CONFIG", temp.path().join("env.toml"))
        .arg("ada")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with("["));
}

// =============================================================================
// CONFIG VALIDATION SPECS
// =============================================================================

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let temp = Project::with_config("version = 1\nunknown_key = true\n");
    initials_cmd()
        .arg("ada")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("unknown field"));
}

/// > Unknown nested keys are errors
#[test]
fn unknown_nested_config_key_fails() {
    let temp = Project::with_config(&format!("{MINIMAL_CONFIG}\n[output]\ncolor = true\n"));
    initials_cmd()
        .arg("ada")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Unsupported versions are errors
#[test]
fn unsupported_version_fails() {
    let temp = Project::with_config("version = 9\n");
    initials_cmd()
        .arg("ada")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

/// > A missing explicit config file is an error
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();
    initials_cmd()
        .args(["--config", "nope.toml", "ada"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read config").and(predicates::str::contains("nope.toml")));
}
