//! CLI module for pathfinder
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command handlers for find, check and demo

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, LogLevel};

use anyhow::Context;

use crate::config::settings::Settings;
use crate::diagnostics::init_diagnostics;

/// Load configuration and apply CLI overrides
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger = ConfigurationMerger::from_config_path(cli.config.as_deref())
        .context("Configuration error")?;

    merger
        .merge_cli_args(cli)
        .context("Configuration merge error")
}

/// Install the diagnostics subscriber described by `settings`
pub fn init_diagnostics_from_settings(settings: &Settings) -> anyhow::Result<()> {
    init_diagnostics(&settings.diagnostics).context("Diagnostics initialization error")
}
