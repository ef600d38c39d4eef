//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default settings file
    #[arg(long, value_name = "FILE")]
    settings_file: Option<PathBuf>,

    /// Default input method descriptor file
    #[arg(long, value_name = "FILE")]
    methods_file: Option<PathBuf>,

    /// Whether a hardware keyboard is attached by default (true or false)
    #[arg(long, value_name = "BOOL")]
    hard_keyboard: Option<bool>,

    /// Comma-separated ids of always-enabled input methods (replaces the list)
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    always_enabled: Option<Vec<String>>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    policy: PolicyOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    settings_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    methods_file: Option<String>,
}

#[derive(Serialize, Debug)]
struct PolicyOutput {
    hard_keyboard: bool,
    always_enabled: Vec<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.settings_file.is_none()
            && self.methods_file.is_none()
            && self.hard_keyboard.is_none()
            && self.always_enabled.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --settings-file, --methods-file, --hard-keyboard, or --always-enabled",
            ));
        }

        // A broken config file is reported rather than replaced with defaults.
        let mut config = if Config::exists() {
            load_config()?
        } else {
            Config::default()
        };

        if let Some(path) = &self.settings_file {
            config.paths.settings_file = Some(path.clone());
        }

        if let Some(path) = &self.methods_file {
            if !path.exists() {
                return Err(CliError::validation(format!(
                    "Input method descriptor file does not exist: {}",
                    path.display()
                )));
            }
            config.paths.input_methods_file = Some(path.clone());
        }

        if let Some(hard_keyboard) = self.hard_keyboard {
            config.policy.hard_keyboard = hard_keyboard;
        }

        if let Some(ids) = &self.always_enabled {
            config.policy.always_enabled = ids
                .iter()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect();
        }

        config.validate().map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            settings_file: config
                .paths
                .settings_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            methods_file: config
                .paths
                .input_methods_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        policy: PolicyOutput {
            hard_keyboard: config.policy.hard_keyboard,
            always_enabled: config.policy.always_enabled.clone(),
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("IME Settings Configuration");
    println!("==========================");
    println!();

    println!("Paths:");
    match &config.paths.settings_file {
        Some(path) => println!("  Settings File: {}", path.display()),
        None => println!("  Settings File: (not configured)"),
    }
    match &config.paths.input_methods_file {
        Some(path) => println!("  Input Methods File: {}", path.display()),
        None => println!("  Input Methods File: (not configured)"),
    }
    println!();

    println!("Policy:");
    println!("  Hardware Keyboard: {}", config.policy.hard_keyboard);
    if config.policy.always_enabled.is_empty() {
        println!("  Always Enabled: (none)");
    } else {
        println!(
            "  Always Enabled: {}",
            config.policy.always_enabled.join(", ")
        );
    }
    println!();
}
