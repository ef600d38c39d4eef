//! Key-value access to the persisted input method settings.
//!
//! Values are stored as strings, the way the platform's secure settings table
//! keeps them; integer accessors parse on read.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read/write access to persisted settings.
pub trait SettingsStore {
    /// Returns the string stored under `key`.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores a string under `key`.
    fn put_string(&mut self, key: &str, value: &str) -> Result<()>;

    /// Returns the integer stored under `key`, or `None` if it is missing or
    /// not an integer.
    fn get_int(&self, key: &str) -> Option<i32> {
        self.get_string(key)
            .and_then(|value| value.trim().parse().ok())
    }

    /// Stores an integer under `key`.
    fn put_int(&mut self, key: &str, value: i32) -> Result<()> {
        self.put_string(key, &value.to_string())
    }
}

/// In-memory settings, used for previews and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    values: BTreeMap<String, String>,
}

impl MemorySettings {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings kept in a flat TOML file.
///
/// Writes are buffered until [`FileSettings::save`], which replaces the file
/// atomically. Integer and boolean values in a hand-written file are accepted
/// and read back as their string form.
///
/// ```toml
/// enabled_input_methods = "com.example/.Ime;12:com.other/.Ime"
/// default_input_method = "com.example/.Ime"
/// selected_input_method_subtype = "12"
/// ```
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSettings {
    /// Opens a settings file. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!("Settings file {} does not exist, starting empty", path.display());
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read settings file: {}", path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .context(format!("Failed to parse settings file: {}", path.display()))?;

        let values = table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Ok(Self { path, values })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes all values to the backing file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create settings directory: {}",
                parent.display()
            ))?;
        }

        let content =
            toml::to_string_pretty(&self.values).context("Failed to serialize settings")?;

        let temp_path = self.path.with_extension("toml.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp settings file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp settings file to: {}",
            self.path.display()
        ))?;

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_int_rejects_garbage() {
        let store = MemorySettings::new().with("a", "12").with("b", "twelve");
        assert_eq!(store.get_int("a"), Some(12));
        assert_eq!(store.get_int("b"), None);
        assert_eq!(store.get_int("c"), None);
    }

    #[test]
    fn test_file_settings_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        let store = FileSettings::open(&path).unwrap();
        assert_eq!(store.get_string("enabled_input_methods"), None);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_file_settings_accepts_integer_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "selected_input_method_subtype = 42\n").unwrap();

        let store = FileSettings::open(&path).unwrap();
        assert_eq!(store.get_int("selected_input_method_subtype"), Some(42));
    }

    #[test]
    fn test_file_settings_save_and_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.toml");

        let mut store = FileSettings::open(&path).unwrap();
        store.put_string("enabled_input_methods", "ime1;1:ime2").unwrap();
        store.put_int("selected_input_method_subtype", -1).unwrap();
        store.save().unwrap();

        let reopened = FileSettings::open(&path).unwrap();
        assert_eq!(
            reopened.get_string("enabled_input_methods").as_deref(),
            Some("ime1;1:ime2")
        );
        assert_eq!(reopened.get_int("selected_input_method_subtype"), Some(-1));
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
