//! CLI argument structures for the nameshift binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse-verified naming convention converter for Python codebases
#[derive(Parser)]
#[command(name = "nameshift")]
#[command(version = VERSION)]
#[command(about = "Convert Python identifier naming conventions, safely")]
#[command(long_about = "
Rename Python identifiers to per-kind naming conventions (snake_case,
camelCase, PascalCase, SCREAMING_SNAKE_CASE). Every rewritten file is
re-parsed before it is written; a file that would stop parsing is left
untouched.

Common Usage:

  # Convert a tree with the standard Python convention
  nameshift convert ./src --preset python_standard

  # Preview without writing anything
  nameshift convert ./src --preset java_style --dry-run

  # Use a preferences file
  nameshift convert ./src --config nameshift.json

  # Write a starting preferences file
  nameshift init-config --preset mixed_style
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert naming conventions under a directory or in a single file
    Convert(ConvertArgs),

    /// Write a preferences JSON file with defaults or a preset
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Print the default preferences JSON to stdout
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// List the shipped preference presets
    #[command(name = "list-presets")]
    ListPresets,
}

/// Arguments for the convert command
#[derive(Args)]
pub struct ConvertArgs {
    /// Directory (or single .py file) to convert
    pub path: PathBuf,

    /// Preferences JSON file
    #[arg(long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Named preset (see list-presets)
    #[arg(long)]
    pub preset: Option<String>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the init-config command
#[derive(Args)]
pub struct InitConfigArgs {
    /// Output path for the preferences file
    #[arg(long, short, default_value = "nameshift.json")]
    pub output: PathBuf,

    /// Start from a named preset instead of the defaults
    #[arg(long)]
    pub preset: Option<String>,
}
