//! Nameshift CLI - parse-verified naming convention conversion for Python.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Convert(args) => cli::convert_command(args),
        Commands::InitConfig(args) => cli::init_config(args),
        Commands::PrintDefaultConfig => cli::print_default_config(),
        Commands::ListPresets => cli::list_presets(),
    }
}
