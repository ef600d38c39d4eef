//! Shared types and helpers for CLI commands.

use crate::config::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid arguments or input content
    ValidationError = 1,
    /// File could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code of the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid arguments or input content.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// Failed file access.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Reads and deserializes a JSON input file.
pub fn read_json_file<T: DeserializeOwned>(path: &Path, what: &str) -> CliResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("Failed to read {} file {}: {}", what, path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!(
            "Invalid {} file {}: {}",
            what,
            path.display(),
            e
        ))
    })
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Picks the path given on the command line, falling back to the configured one.
pub fn resolve_path(
    arg: Option<&PathBuf>,
    configured: Option<&PathBuf>,
    flag: &str,
) -> CliResult<PathBuf> {
    arg.or(configured).cloned().ok_or_else(|| {
        CliError::validation(format!(
            "No {flag} given and none configured (see `config set`)"
        ))
    })
}

/// Loads the configuration, reporting a broken file as a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code.code(), 1);
        assert_eq!(CliError::io("x").exit_code.code(), 2);
    }

    #[test]
    fn test_resolve_path_prefers_argument() {
        let arg = PathBuf::from("a.toml");
        let configured = PathBuf::from("b.toml");

        assert_eq!(
            resolve_path(Some(&arg), Some(&configured), "--settings").unwrap(),
            arg
        );
        assert_eq!(
            resolve_path(None, Some(&configured), "--settings").unwrap(),
            configured
        );
        assert!(resolve_path(None, None, "--settings").is_err());
    }
}
