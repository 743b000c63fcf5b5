//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use std::sync::Arc;

use anyhow::Context;

use super::handlers::{CheckCommandHandler, DemoCommandHandler, FindCommandHandler};
use super::parser::{Cli, Commands};
use crate::clock::{DaySource, FixedDay};
use crate::config::settings::Settings;

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns errors from command handlers, annotated with the command name
pub fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    let day_source = resolve_day_source(cli, &settings)?;

    match &cli.command {
        Commands::Find { message } => FindCommandHandler::new(settings, day_source)
            .execute(message)
            .context("find failed"),
        Commands::Check => CheckCommandHandler::new(settings, day_source)
            .execute()
            .context("check failed"),
        Commands::Demo { message, path } => DemoCommandHandler::new(path.clone(), day_source)
            .execute(message)
            .context("demo failed"),
    }
}

/// `--today` pins the day; otherwise the configured wall clock is used
pub fn resolve_day_source(cli: &Cli, settings: &Settings) -> anyhow::Result<Arc<dyn DaySource>> {
    match cli.today {
        Some(day) => {
            tracing::debug!(%day, "Using pinned weekday");
            Ok(Arc::new(FixedDay(day)))
        }
        None => settings
            .clock
            .day_source()
            .context("Invalid clock configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Weekday;
    use crate::config::LoggerSpec;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn gated_file_settings(path: PathBuf) -> Settings {
        Settings {
            logger: LoggerSpec::Gated {
                day: Weekday::Friday,
                inner: Some(Box::new(LoggerSpec::File { path })),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_today_override_opens_gate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let cli = Cli::try_parse_from(["pathfinder", "--today", "friday", "find", "pinned"]).unwrap();

        execute_command(&cli, gated_file_settings(path.clone())).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "pinned");
    }

    #[test]
    fn test_today_override_closes_gate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let cli = Cli::try_parse_from(["pathfinder", "--today", "tue", "find", "pinned"]).unwrap();

        execute_command(&cli, gated_file_settings(path.clone())).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_find_failure_has_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let cli = Cli::try_parse_from(["pathfinder", "--today", "fri", "find", "x"]).unwrap();

        let err = execute_command(&cli, gated_file_settings(path)).unwrap_err();

        assert_eq!(err.to_string(), "find failed");
        assert!(format!("{err:#}").contains("missing"));
    }

    #[test]
    fn test_resolve_day_source_uses_clock_config() {
        let cli = Cli::try_parse_from(["pathfinder", "check"]).unwrap();
        let mut settings = Settings::default();
        settings.clock.time_zone = Some("UTC".to_string());

        assert!(resolve_day_source(&cli, &settings).is_ok());

        settings.clock.time_zone = Some("Atlantis/Capital".to_string());
        assert!(resolve_day_source(&cli, &settings).is_err());
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::try_parse_from(["pathfinder", "--today", "sat", "check"]).unwrap();
        assert!(execute_command(&cli, Settings::default()).is_ok());
    }
}
