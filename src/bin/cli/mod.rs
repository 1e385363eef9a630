//! CLI module organization.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{convert_command, init_config, list_presets, print_default_config};
