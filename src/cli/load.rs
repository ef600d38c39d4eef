//! Show the checkboxes a settings screen would display.

use crate::cli::common::{
    load_config, print_json, read_json_file, resolve_path, CliError, CliResult,
};
use crate::models::InputMethodDescriptor;
use crate::services::{load_input_method_subtype_list, FileSettings, SubtypeListView};
use clap::Args;
use std::path::PathBuf;

/// Project stored settings onto input method and subtype checkboxes
#[derive(Debug, Clone, Args)]
pub struct LoadArgs {
    /// Settings file (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// JSON list of installed input methods (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub methods: Option<PathBuf>,

    /// Output as JSON (the `toggles` object can be fed to `save --toggles`)
    #[arg(long)]
    pub json: bool,
}

impl LoadArgs {
    /// Execute the load command
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
        let store = FileSettings::open(&settings_path)
            .map_err(|e| CliError::io(format!("Failed to open settings: {e:#}")))?;

        let view = load_input_method_subtype_list(&store, &input_methods);

        if self.json {
            print_json(&view)
        } else {
            output_human_readable(&input_methods, &view);
            Ok(())
        }
    }
}

fn output_human_readable(input_methods: &[InputMethodDescriptor], view: &SubtypeListView) {
    for imi in input_methods {
        let checked = view.toggles.input_method_checked(&imi.id).unwrap_or(false);
        let system = if imi.is_system { " (system)" } else { "" };
        println!("[{}] {}{}", mark(checked), imi.display_name(), system);

        let interactive = view.subtypes_enabled.get(&imi.id).copied().unwrap_or(false);
        for subtype in &imi.subtypes {
            let hash = subtype.hash_string();
            let state = if interactive {
                mark(view.toggles.subtype_checked(&imi.id, &hash).unwrap_or(false))
            } else {
                "-"
            };
            match &subtype.locale {
                Some(locale) => println!("    [{state}] {hash} {locale}"),
                None => println!("    [{state}] {hash}"),
            }
        }
    }
}

const fn mark(checked: bool) -> &'static str {
    if checked {
        "x"
    } else {
        " "
    }
}
