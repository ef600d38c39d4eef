//! Shared test fixtures for library and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use ime_settings::models::{
    DisabledSystemSet, EnabledMap, InputMethodDescriptor, PersistedSettings, SelectedSubtype,
    Subtype, ToggleState,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A user-installed keyboard with two subtypes (1001 en_US, 1002 de_DE).
pub fn latin_ime() -> InputMethodDescriptor {
    let mut imi = InputMethodDescriptor::new("com.example.latin/.LatinIME");
    imi.label = Some("Latin Keyboard".to_string());
    imi.subtypes = vec![
        Subtype::new(1001).with_locale("en_US"),
        Subtype::new(1002).with_locale("de_DE"),
    ];
    imi
}

/// A system keyboard with one subtype (2001).
pub fn system_ime() -> InputMethodDescriptor {
    InputMethodDescriptor::new("android.sys/.SysIME")
        .system()
        .with_subtype(2001)
}

/// A user-installed voice input method without subtypes.
pub fn voice_ime() -> InputMethodDescriptor {
    InputMethodDescriptor::new("com.example.voice/.VoiceIME")
}

/// Builds an `EnabledMap` from `(id, hashes)` pairs.
pub fn enabled_map(entries: &[(&str, &[&str])]) -> EnabledMap {
    let mut map = EnabledMap::new();
    for (id, hashes) in entries {
        map.insert(*id, hashes.iter().copied());
    }
    map
}

/// Builds a settings snapshot.
pub fn persisted(
    enabled: EnabledMap,
    disabled: &[&str],
    current: Option<&str>,
    selected: i32,
) -> PersistedSettings {
    PersistedSettings {
        enabled,
        disabled_system: disabled.iter().copied().collect::<DisabledSystemSet>(),
        current_input_method: current.map(str::to_string),
        selected_subtype: SelectedSubtype::from_persisted(selected),
    }
}

/// Builds a toggle state from input method and subtype checkboxes.
pub fn toggles(input_methods: &[(&str, bool)], subtypes: &[(&str, &str, bool)]) -> ToggleState {
    let mut state = ToggleState::new();
    for (id, checked) in input_methods {
        state.set_input_method(*id, *checked);
    }
    for (id, hash, checked) in subtypes {
        state.set_subtype(*id, *hash, *checked);
    }
    state
}

/// Path to the ime-settings binary
pub fn ime_settings_bin() -> &'static str {
    env!("CARGO_BIN_EXE_ime-settings")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(ime_settings_bin());
    cmd.env("IME_SETTINGS_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Writes the descriptor list as JSON and returns its path.
pub fn write_methods_file(dir: &Path, input_methods: &[InputMethodDescriptor]) -> PathBuf {
    let path = dir.join("methods.json");
    fs::write(&path, serde_json::to_string_pretty(input_methods).unwrap()).unwrap();
    path
}

/// Writes a toggle state as JSON and returns its path.
pub fn write_toggles_file(dir: &Path, state: &ToggleState) -> PathBuf {
    let path = dir.join("toggles.json");
    fs::write(&path, serde_json::to_string_pretty(state).unwrap()).unwrap();
    path
}

/// Writes a settings file with the given TOML content and returns its path.
pub fn write_settings_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("settings.toml");
    fs::write(&path, content).unwrap();
    path
}
