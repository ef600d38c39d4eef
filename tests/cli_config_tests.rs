//! End-to-end tests for `ime-settings config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Settings File: (not configured)"));
    assert!(stdout.contains("Hardware Keyboard: false"));
}

#[test]
fn test_config_show_json_schema() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Should parse JSON output");

    assert!(result["paths"].is_object(), "Should have paths object");
    assert!(result["policy"].is_object(), "Should have policy object");
    assert_eq!(result["policy"]["hard_keyboard"], false);
    assert_eq!(result["policy"]["always_enabled"], serde_json::json!([]));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_policy() {
    let temp_dir = TempDir::new().unwrap();

    let output = isolated_command(
        &[
            "config",
            "set",
            "--hard-keyboard",
            "true",
            "--always-enabled",
            "com.example.latin/.LatinIME, com.example.voice/.VoiceIME",
        ],
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
    assert!(temp_dir.path().join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(result["policy"]["hard_keyboard"], true);
    assert_eq!(
        result["policy"]["always_enabled"],
        serde_json::json!(["com.example.latin/.LatinIME", "com.example.voice/.VoiceIME"])
    );
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_separator_in_id() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["config", "set", "--always-enabled", "bad;id"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_missing_methods_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");
    let output = isolated_command(
        &["config", "set", "--methods-file", missing.to_str().unwrap()],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_leaves_broken_config_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let content = "[paths]\nsettings_file = \"/data/settings.toml\"\n\n\
                   [policy]\nalways_enabled = [\"bad:id\"]\n";
    fs::write(&config_path, content).unwrap();

    let output = isolated_command(
        &["config", "set", "--hard-keyboard", "true"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), content);
}

#[test]
fn test_config_set_leaves_unparseable_config_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "this is = = not toml").unwrap();

    let output = isolated_command(
        &["config", "set", "--hard-keyboard", "true"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        "this is = = not toml"
    );
}

#[test]
fn test_configured_paths_and_policy_drive_save() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    let methods = write_methods_file(temp_dir.path(), &[system_ime()]);
    let settings = temp_dir.path().join("settings.toml");

    let output = isolated_command(
        &[
            "config",
            "set",
            "--settings-file",
            settings.to_str().unwrap(),
            "--methods-file",
            methods.to_str().unwrap(),
            "--always-enabled",
            "android.sys/.SysIME",
        ],
        &config_dir,
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    // Unchecked, but kept enabled by policy since no hardware keyboard is configured.
    let toggles_path =
        write_toggles_file(temp_dir.path(), &toggles(&[("android.sys/.SysIME", false)], &[]));
    let output = isolated_command(
        &["save", "--toggles", toggles_path.to_str().unwrap()],
        &config_dir,
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = fs::read_to_string(&settings).unwrap();
    let stored: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(
        stored["enabled_input_methods"].as_str(),
        Some("android.sys/.SysIME")
    );
    assert_eq!(stored["selected_input_method_subtype"].as_str(), Some("-1"));
}
