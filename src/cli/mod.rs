//! CLI command handlers for ime-settings.
//!
//! This module provides headless, scriptable access to the input method
//! settings codec and reconciliation for automation and testing.

pub mod common;
pub mod config;
pub mod load;
pub mod parse;
pub mod save;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use load::LoadArgs;
pub use parse::ParseArgs;
pub use save::SaveArgs;
pub use show::ShowArgs;
