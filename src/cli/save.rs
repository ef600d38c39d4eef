//! Reconcile checkbox state with a settings file and write it back.

use crate::cli::common::{
    load_config, print_json, read_json_file, resolve_path, CliError, CliResult,
};
use crate::models::{InputMethodDescriptor, ToggleState};
use crate::services::{save_input_method_subtype_list, FileSettings, SaveReport};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Save input method and subtype checkbox state to a settings file
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Settings file (defaults to the configured one, created if missing)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// JSON list of installed input methods (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub methods: Option<PathBuf>,

    /// JSON checkbox state; without it every input method keeps its stored state
    #[arg(short, long, value_name = "FILE")]
    pub toggles: Option<PathBuf>,

    /// A hardware keyboard is attached
    #[arg(long, conflicts_with = "no_hard_keyboard")]
    pub hard_keyboard: bool,

    /// No hardware keyboard is attached
    #[arg(long)]
    pub no_hard_keyboard: bool,

    /// Print what would be written without saving
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct SaveOutput<'a> {
    settings_file: String,
    dry_run: bool,
    hard_keyboard: bool,
    #[serde(flatten)]
    report: &'a SaveReport,
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let settings_path = resolve_path(
            self.settings.as_ref(),
            config.paths.settings_file.as_ref(),
            "--settings",
        )?;
        let methods_path = resolve_path(
            self.methods.as_ref(),
            config.paths.input_methods_file.as_ref(),
            "--methods",
        )?;

        let input_methods: Vec<InputMethodDescriptor> =
            read_json_file(&methods_path, "input methods")?;
        let toggles = match &self.toggles {
            Some(path) => read_json_file(path, "toggles")?,
            None => ToggleState::new(),
        };

        let has_hard_keyboard = if self.hard_keyboard {
            true
        } else if self.no_hard_keyboard {
            false
        } else {
            config.policy.hard_keyboard
        };

        let mut store = FileSettings::open(&settings_path)
            .map_err(|e| CliError::io(format!("Failed to open settings: {e:#}")))?;

        let report = save_input_method_subtype_list(
            &mut store,
            &input_methods,
            &toggles,
            has_hard_keyboard,
            |imi| config.policy.is_always_enabled(imi),
        )
        .map_err(|e| CliError::io(format!("Failed to update settings: {e:#}")))?;

        if !self.dry_run {
            store
                .save()
                .map_err(|e| CliError::io(format!("Failed to save settings: {e:#}")))?;
            info!("Saved input method settings to {}", store.path().display());
        }

        if self.json {
            return print_json(&SaveOutput {
                settings_file: store.path().to_string_lossy().to_string(),
                dry_run: self.dry_run,
                hard_keyboard: has_hard_keyboard,
                report: &report,
            });
        }

        if self.dry_run {
            println!("Dry run, nothing written to {}", store.path().display());
        } else {
            println!("Settings saved to {}", store.path().display());
        }
        println!("  Enabled input methods: {}", report.enabled_input_methods);
        match &report.disabled_system_input_methods {
            Some(value) => println!("  Disabled system input methods: {value}"),
            None => println!("  Disabled system input methods: (unchanged)"),
        }
        if report.default_input_method.is_empty() {
            println!("  Default input method: (platform choice)");
        } else {
            println!("  Default input method: {}", report.default_input_method);
        }
        if report.selected_subtype_reset {
            println!("  Selected subtype: reset");
        }
        Ok(())
    }
}
