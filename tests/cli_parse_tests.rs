//! End-to-end tests for `ime-settings parse` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_parse_enabled_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["parse", "enabled", "ime1;10;11::ime2", "--json"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["input_methods"]["ime1"], serde_json::json!(["10", "11"]));
    assert_eq!(result["input_methods"]["ime2"], serde_json::json!([]));
    assert_eq!(result["normalized"], "ime1;10;11:ime2");
}

#[test]
fn test_parse_enabled_human_readable() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(&["parse", "enabled", "ime1;10:ime2"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ime1: 10"));
    assert!(stdout.contains("ime2: (default subtype)"));
    assert!(stdout.contains("Normalized: ime1;10:ime2"));
}

#[test]
fn test_parse_enabled_empty_value() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(&["parse", "enabled", "", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["input_methods"], serde_json::json!({}));
    assert_eq!(result["normalized"], "");
}

#[test]
fn test_parse_disabled_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["parse", "disabled", "sys1::sys2:sys1", "--json"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["input_methods"], serde_json::json!(["sys1", "sys2"]));
    assert_eq!(result["normalized"], "sys1:sys2");
}
