//! Show the decoded contents of a settings file.

use crate::cli::common::{load_config, print_json, resolve_path, CliError, CliResult};
use crate::models::{PersistedSettings, SelectedSubtype};
use crate::services::{read_settings, FileSettings};
use clap::Args;
use std::path::PathBuf;

/// Show the input method settings stored in a settings file
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Settings file (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let path = resolve_path(
            self.settings.as_ref(),
            config.paths.settings_file.as_ref(),
            "--settings",
        )?;

        let store = FileSettings::open(&path)
            .map_err(|e| CliError::io(format!("Failed to open settings: {e:#}")))?;
        let settings = read_settings(&store);

        if self.json {
            print_json(&settings)
        } else {
            output_human_readable(&settings);
            Ok(())
        }
    }
}

fn output_human_readable(settings: &PersistedSettings) {
    println!("Enabled input methods:");
    if settings.enabled.is_empty() {
        println!("  (none)");
    }
    for (id, subtypes) in settings.enabled.iter() {
        if subtypes.is_empty() {
            println!("  {id} (default subtype)");
        } else {
            let hashes: Vec<&str> = subtypes.iter().map(String::as_str).collect();
            println!("  {id} [{}]", hashes.join(", "));
        }
    }
    println!();

    println!("Disabled system input methods:");
    if settings.disabled_system.is_empty() {
        println!("  (none)");
    }
    for id in settings.disabled_system.iter() {
        println!("  {id}");
    }
    println!();

    println!(
        "Default input method: {}",
        settings
            .current_input_method
            .as_deref()
            .unwrap_or("(platform choice)")
    );
    match settings.selected_subtype {
        SelectedSubtype::None => println!("Selected subtype: (none)"),
        SelectedSubtype::Hash(hash) => println!("Selected subtype: {hash}"),
    }
}
