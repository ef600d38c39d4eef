//! Decode persisted input method strings without touching any file.

use crate::cli::common::{print_json, CliResult};
use crate::models::{DisabledSystemSet, EnabledMap};
use crate::parser::{
    parse_disabled_system_input_methods, parse_enabled_input_methods,
    serialize_disabled_system_input_methods, serialize_enabled_input_methods,
};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Decode a persisted settings string
#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(subcommand)]
    command: ParseCommand,
}

#[derive(Subcommand, Debug)]
enum ParseCommand {
    /// Decode an ENABLED_INPUT_METHODS value
    Enabled(ParseValueArgs),
    /// Decode a DISABLED_SYSTEM_INPUT_METHODS value
    Disabled(ParseValueArgs),
}

/// A raw settings value
#[derive(Args, Debug)]
pub struct ParseValueArgs {
    /// Value to decode (may be empty)
    #[arg(value_name = "VALUE", allow_hyphen_values = true, default_value = "")]
    value: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct EnabledOutput<'a> {
    input_methods: &'a EnabledMap,
    normalized: String,
}

#[derive(Serialize, Debug)]
struct DisabledOutput<'a> {
    input_methods: &'a DisabledSystemSet,
    normalized: String,
}

impl ParseArgs {
    /// Execute parse subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ParseCommand::Enabled(args) => args.execute_enabled(),
            ParseCommand::Disabled(args) => args.execute_disabled(),
        }
    }
}

impl ParseValueArgs {
    fn execute_enabled(&self) -> CliResult<()> {
        let map = parse_enabled_input_methods(Some(&self.value));
        let normalized = serialize_enabled_input_methods(&map);

        if self.json {
            return print_json(&EnabledOutput {
                input_methods: &map,
                normalized,
            });
        }

        if map.is_empty() {
            println!("No enabled input methods.");
            return Ok(());
        }
        for (id, subtypes) in map.iter() {
            if subtypes.is_empty() {
                println!("{id}: (default subtype)");
            } else {
                let hashes: Vec<&str> = subtypes.iter().map(String::as_str).collect();
                println!("{id}: {}", hashes.join(", "));
            }
        }
        println!();
        println!("Normalized: {normalized}");
        Ok(())
    }

    fn execute_disabled(&self) -> CliResult<()> {
        let set = parse_disabled_system_input_methods(Some(&self.value));
        let normalized = serialize_disabled_system_input_methods(&set);

        if self.json {
            return print_json(&DisabledOutput {
                input_methods: &set,
                normalized,
            });
        }

        if set.is_empty() {
            println!("No disabled system input methods.");
            return Ok(());
        }
        for id in set.iter() {
            println!("{id}");
        }
        Ok(())
    }
}
