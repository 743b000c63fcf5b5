//! Find command handler
//!
//! Builds the configured composition and pushes one message through a
//! [`Pathfinder`].

use std::sync::Arc;

use crate::clock::DaySource;
use crate::config::settings::Settings;
use crate::error::LogResult;
use crate::pathfinder::Pathfinder;

/// Handler for the find command
pub struct FindCommandHandler {
    config: Settings,
    day_source: Arc<dyn DaySource>,
}

impl FindCommandHandler {
    pub fn new(config: Settings, day_source: Arc<dyn DaySource>) -> Self {
        Self { config, day_source }
    }

    /// Build the logger tree and forward `message`
    ///
    /// # Errors
    /// - `InvalidArgument` if the composition cannot be constructed
    /// - the logger's own error if the write fails
    pub fn execute(&self, message: &str) -> LogResult<()> {
        let logger = self.config.logger.build(&self.day_source)?;
        tracing::debug!(root = logger.name(), "Logger composition built");

        Pathfinder::new(logger).find(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedDay, Weekday};
    use crate::config::LoggerSpec;
    use crate::loggers::Delivery;
    use std::fs;
    use tempfile::TempDir;

    fn settings_with(logger: LoggerSpec) -> Settings {
        Settings {
            logger,
            ..Default::default()
        }
    }

    #[test]
    fn test_find_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let handler = FindCommandHandler::new(
            settings_with(LoggerSpec::File { path: path.clone() }),
            Arc::new(FixedDay(Weekday::Monday)),
        );

        handler.execute("route lost").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "route lost");
    }

    #[test]
    fn test_find_reports_partial_failure() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("missing").join("bad.txt");
        let handler = FindCommandHandler::new(
            settings_with(LoggerSpec::FanOut {
                delivery: Delivery::Sequential,
                loggers: vec![
                    LoggerSpec::File { path: bad },
                    LoggerSpec::File { path: good.clone() },
                ],
            }),
            Arc::new(FixedDay(Weekday::Friday)),
        );

        let err = handler.execute("half delivered").unwrap_err();

        assert_eq!(err.as_multi().unwrap().failed_indices(), vec![0]);
        assert_eq!(fs::read_to_string(&good).unwrap(), "half delivered");
    }

    #[test]
    fn test_find_rejects_invalid_tree() {
        let handler = FindCommandHandler::new(
            settings_with(LoggerSpec::Gated {
                day: Weekday::Friday,
                inner: None,
            }),
            Arc::new(FixedDay(Weekday::Friday)),
        );

        assert!(handler.execute("x").is_err_and(|e| e.is_invalid_argument()));
    }
}
