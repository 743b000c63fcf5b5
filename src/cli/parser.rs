//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;
use crate::clock::Weekday;

/// Forward error messages through a configurable logger composition
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(about = "Forward error messages through a configurable logger composition")]
#[command(long_about = "
Pathfinder hands error messages to a composed logger: console and file
backends, optionally wrapped in a day gate (write only on one weekday) or a
fan-out (write to several loggers, collecting every failure).

EXAMPLES:
    # Log through the composition described in ./pathfinder.toml
    pathfinder find \"route table corrupted\"

    # Use a specific configuration file
    pathfinder --config /etc/pathfinder/prod.toml find \"disk full\"

    # Pretend it is Friday so day-gated loggers open
    pathfinder --today friday find \"weekly report failed\"

    # Show the configured composition without writing anything
    pathfinder check

    # Run the reference compositions against ./log.txt
    pathfinder demo \"hello\"
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// TOML file describing the logger composition. Overrides
    /// PATHFINDER_CONFIG_FILE and ./pathfinder.toml. The file must exist.
    ///
    /// Example: --config /etc/pathfinder/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Pin the current weekday for day-gated loggers
    ///
    /// Replaces the wall clock. Accepts full names or three-letter
    /// abbreviations (mon, tue, ..., sun).
    #[arg(long, value_name = "DAY", value_parser = super::validation::validate_weekday)]
    pub today: Option<Weekday>,

    /// Diagnostics level override
    ///
    /// Takes precedence over --verbose/--quiet and the configuration file.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose diagnostics (debug level)
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show error diagnostics
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one error message through the configured logger
    ///
    /// Exits non-zero and prints every failed destination when the write
    /// fails. Messages dropped by a closed day gate count as success.
    Find {
        /// The message to log (may be empty)
        #[arg(value_name = "MESSAGE", allow_hyphen_values = true)]
        message: String,
    },
    /// Validate configuration and print the logger composition
    ///
    /// Nothing is written to any logger.
    Check,
    /// Run the five reference compositions
    ///
    /// console, file, gated console, gated file, and a fan-out of console
    /// plus gated file. Prints one outcome line per composition.
    Demo {
        /// The message to log
        #[arg(value_name = "MESSAGE", default_value = "Pathfinder demo message")]
        message: String,

        /// File used by the file-backed compositions
        #[arg(long, value_name = "FILE", default_value = "log.txt", value_parser = super::validation::validate_log_path)]
        path: PathBuf,
    },
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}
