//! Behavior tests for output formats.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > -o json prints an array of name/initials objects
#[test]
fn json_output() {
    let temp = Project::empty();
    let output = initials_cmd()
        .args(["-o", "json", "john smith", ""])
        .current_dir(temp.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "name": "john smith", "initials": "JS" },
            { "name": "", "initials": "" },
        ])
    );
}

/// > JSON output is pretty printed and newline terminated
#[test]
fn json_output_is_pretty() {
    let temp = Project::empty();
    initials_cmd()
        .args(["--output", "json", "ada"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("[\n  {\n    \"name\": \"ada\",\n    \"initials\": \"A\"\n  }\n]\n");
}

/// > --skip-empty drops blank names from the output
#[test]
fn skip_empty_drops_rows() {
    let temp = Project::empty();
    initials_cmd()
        .args(["--skip-empty", "", "john smith", "  "])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("JS\n")
        .stderr(predicates::str::contains("empty name"));
}

/// > Unknown output formats are rejected by argument parsing
#[test]
fn unknown_format_rejected() {
    let temp = Project::empty();
    initials_cmd()
        .args(["-o", "yaml", "ada"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid value"));
}
