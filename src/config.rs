//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{INPUT_METHOD_SEPARATOR, INPUT_METHOD_SUBTYPE_SEPARATOR};
use crate::models::InputMethodDescriptor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "IME_SETTINGS_CONFIG_DIR";

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Settings file used when `--settings` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<PathBuf>,
    /// Input method descriptor file used when `--methods` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_methods_file: Option<PathBuf>,
}

/// Device policy applied during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PolicyConfig {
    /// Assume a hardware keyboard is attached unless overridden per command
    #[serde(default)]
    pub hard_keyboard: bool,
    /// Input methods that stay enabled while no hardware keyboard is attached
    #[serde(default)]
    pub always_enabled: Vec<String>,
}

impl PolicyConfig {
    /// Whether `imi` is kept enabled without a hardware keyboard.
    #[must_use]
    pub fn is_always_enabled(&self, imi: &InputMethodDescriptor) -> bool {
        self.always_enabled.iter().any(|id| *id == imi.id)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ImeSettings/config.toml`
/// - macOS: `~/Library/Application Support/ImeSettings/config.toml`
/// - Windows: `%APPDATA%\ImeSettings\config.toml`
///
/// `IME_SETTINGS_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - `always_enabled` ids must be non-empty and must not contain `:` or `;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Reconciliation policy
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/ImeSettings/`
    /// - macOS: `~/Library/Application Support/ImeSettings/`
    /// - Windows: `%APPDATA%\ImeSettings\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ImeSettings");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        for id in &self.policy.always_enabled {
            if id.is_empty() {
                anyhow::bail!("Always-enabled input method id cannot be empty");
            }
            if id.contains(INPUT_METHOD_SEPARATOR) || id.contains(INPUT_METHOD_SUBTYPE_SEPARATOR) {
                anyhow::bail!(
                    "Always-enabled input method id '{id}' cannot contain '{INPUT_METHOD_SEPARATOR}' or '{INPUT_METHOD_SUBTYPE_SEPARATOR}'"
                );
            }
        }

        Ok(())
    }
}
