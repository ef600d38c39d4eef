//! IME Settings - headless manager for enabled input methods and subtypes
//!
//! This application decodes, inspects, and updates the persisted input method
//! settings of a device from the command line.

use clap::{Parser, Subcommand};
use ime_settings::cli::{
    CliResult, ConfigArgs, LoadArgs, ParseArgs, SaveArgs, ShowArgs,
};
use ime_settings::constants::{APP_BINARY_NAME, APP_NAME};
use tracing_subscriber::EnvFilter;

/// IME Settings - manage enabled input methods and subtypes
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a persisted settings string
    Parse(ParseArgs),
    /// Show the settings stored in a settings file
    Show(ShowArgs),
    /// Show the checkboxes a settings screen would display
    Load(LoadArgs),
    /// Save checkbox state to a settings file
    Save(SaveArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_logging(verbose: bool) {
    // RUST_LOG overrides the default filter entirely.
    let default_directives = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Parse(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Load(args) => args.execute(),
        Commands::Save(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
