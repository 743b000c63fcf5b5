//! Demo command handler
//!
//! Runs the reference compositions side by side so their behavior can be
//! compared on a given day.

use std::path::PathBuf;
use std::sync::Arc;

use crate::clock::{DaySource, Weekday};
use crate::error::{LogError, LogResult};
use crate::loggers::{
    BoxedLogger, ConsoleLogger, ErrorLogger, FanOutLogger, FileLogger, GatedLogger,
};
use crate::pathfinder::Pathfinder;

/// Result of one reference composition
#[derive(Debug)]
pub struct DemoOutcome {
    pub label: &'static str,
    /// Whether the composition's day gate was open; `None` when ungated
    pub gate_open: Option<bool>,
    pub result: LogResult<()>,
}

impl DemoOutcome {
    pub fn summary(&self) -> String {
        let status = match (&self.result, self.gate_open) {
            (Err(e), _) => format!("failed: {e}"),
            (Ok(()), Some(false)) => "ok (gate closed, message dropped)".to_string(),
            (Ok(()), _) => "ok".to_string(),
        };
        format!("{:<22} {status}", self.label)
    }
}

/// Handler for the demo command
pub struct DemoCommandHandler {
    path: PathBuf,
    day_source: Arc<dyn DaySource>,
}

impl DemoCommandHandler {
    pub fn new(path: PathBuf, day_source: Arc<dyn DaySource>) -> Self {
        Self { path, day_source }
    }

    /// Runs every composition and prints one summary line each on stderr
    ///
    /// # Errors
    /// Fails when at least one composition failed; each failure is already
    /// in the printed summary.
    pub fn execute(&self, message: &str) -> LogResult<()> {
        let outcomes = self.run(message);
        for outcome in &outcomes {
            eprintln!("{}", outcome.summary());
        }

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        if failed > 0 {
            return Err(LogError::io(
                "demo",
                std::io::Error::other(format!(
                    "{failed} of {} compositions failed",
                    outcomes.len()
                )),
            ));
        }

        Ok(())
    }

    /// Sends `message` through each composition in turn
    pub fn run(&self, message: &str) -> Vec<DemoOutcome> {
        let gate_open = Some(self.day_source.today() == Weekday::Friday);

        let fan_out = FanOutLogger::new(vec![
            Box::new(ConsoleLogger::new()) as BoxedLogger,
            Box::new(self.gated(self.file())),
        ]);

        vec![
            run_one("console", None, Ok(ConsoleLogger::new()), message),
            run_one("file", None, Ok(self.file()), message),
            run_one(
                "gated console",
                gate_open,
                Ok(self.gated(ConsoleLogger::new())),
                message,
            ),
            run_one("gated file", gate_open, Ok(self.gated(self.file())), message),
            run_one("console + gated file", gate_open, fan_out, message),
        ]
    }

    fn file(&self) -> FileLogger {
        FileLogger::new(&self.path)
    }

    fn gated<L: ErrorLogger>(&self, inner: L) -> GatedLogger<L> {
        GatedLogger::with_day_source(inner, Weekday::Friday, self.day_source.clone())
    }
}

fn run_one<L: ErrorLogger>(
    label: &'static str,
    gate_open: Option<bool>,
    logger: LogResult<L>,
    message: &str,
) -> DemoOutcome {
    let result = logger.and_then(|logger| Pathfinder::new(logger).find(message));
    if let Err(ref e) = result {
        tracing::warn!(composition = label, error = %e, "Demo composition failed");
    }

    DemoOutcome {
        label,
        gate_open,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedDay;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_demo_on_friday_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let handler = DemoCommandHandler::new(path.clone(), Arc::new(FixedDay(Weekday::Friday)));

        let outcomes = handler.run("demo message");

        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "demo message");
        assert_eq!(outcomes[3].summary().trim_end(), format!("{:<22} ok", "gated file"));
    }

    #[test]
    fn test_demo_off_day_reports_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let handler = DemoCommandHandler::new(path, Arc::new(FixedDay(Weekday::Monday)));

        let outcomes = handler.run("monday");

        assert!(outcomes[2].summary().ends_with("ok (gate closed, message dropped)"));
        assert_eq!(outcomes[0].gate_open, None);
    }

    #[test]
    fn test_demo_bad_path_fails_file_compositions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let handler = DemoCommandHandler::new(path, Arc::new(FixedDay(Weekday::Friday)));

        let outcomes = handler.run("nowhere");
        let failed: Vec<_> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.label)
            .collect();

        assert_eq!(failed, vec!["file", "gated file", "console + gated file"]);
        assert!(handler.execute("nowhere").is_err());
    }
}
