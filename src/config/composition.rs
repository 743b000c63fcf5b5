//! Declarative logger trees
//!
//! A [`LoggerSpec`] is the configuration-side mirror of a composed logger.
//! Building always goes through the public logger constructors, so an
//! invalid tree fails with the same `InvalidArgument` errors as hand-built
//! code.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::{DaySource, Weekday};
use crate::config::error::ConfigError;
use crate::error::{LogError, LogResult};
use crate::loggers::{
    BoxedLogger, ConsoleLogger, Delivery, FanOutLogger, FileLogger, GatedLogger,
};

/// One node of a logger composition
///
/// ```toml
/// [logger]
/// kind = "fan_out"
///
/// [[logger.loggers]]
/// kind = "console"
///
/// [[logger.loggers]]
/// kind = "gated"
/// day = "friday"
/// inner = { kind = "file", path = "log.txt" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoggerSpec {
    #[default]
    Console,
    File {
        path: PathBuf,
    },
    Gated {
        #[serde(default)]
        day: Weekday,
        #[serde(default)]
        inner: Option<Box<LoggerSpec>>,
    },
    FanOut {
        #[serde(default)]
        delivery: Delivery,
        #[serde(default)]
        loggers: Vec<LoggerSpec>,
    },
}

impl LoggerSpec {
    /// Instantiates the tree; every gate shares `day_source`.
    pub fn build(&self, day_source: &Arc<dyn DaySource>) -> LogResult<BoxedLogger> {
        let logger: BoxedLogger = match self {
            LoggerSpec::Console => Box::new(ConsoleLogger::new()),
            LoggerSpec::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(LogError::invalid_argument("file logger path is empty"));
                }
                Box::new(FileLogger::new(path.clone()))
            }
            LoggerSpec::Gated { day, inner } => {
                let inner = inner
                    .as_deref()
                    .map(|spec| spec.build(day_source))
                    .transpose()?;
                Box::new(GatedLogger::from_option(inner, *day, day_source.clone())?)
            }
            LoggerSpec::FanOut { delivery, loggers } => {
                let loggers = loggers
                    .iter()
                    .map(|spec| spec.build(day_source))
                    .collect::<LogResult<Vec<_>>>()?;
                Box::new(FanOutLogger::with_delivery(loggers, *delivery)?)
            }
        };

        Ok(logger)
    }

    /// Checks the tree, reporting the first problem with its field path
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        match self {
            LoggerSpec::Console => Ok(()),
            LoggerSpec::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::validation(
                        format!("{field}.path"),
                        "File logger path cannot be empty",
                    ));
                }
                Ok(())
            }
            LoggerSpec::Gated { inner, .. } => match inner {
                Some(inner) => inner.validate(&format!("{field}.inner")),
                None => Err(ConfigError::validation(
                    format!("{field}.inner"),
                    "Gated logger requires an inner logger",
                )),
            },
            LoggerSpec::FanOut { loggers, .. } => {
                if loggers.is_empty() {
                    return Err(ConfigError::validation(
                        format!("{field}.loggers"),
                        "Fan-out logger requires at least one inner logger",
                    ));
                }
                loggers
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, spec)| spec.validate(&format!("{field}.loggers[{i}]")))
            }
        }
    }

    /// Indented, one-node-per-line rendering of the tree
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.to_string());
        out.push('\n');

        match self {
            LoggerSpec::Gated {
                inner: Some(inner), ..
            } => inner.write_tree(out, depth + 1),
            LoggerSpec::FanOut { loggers, .. } => {
                for spec in loggers {
                    spec.write_tree(out, depth + 1);
                }
            }
            _ => {}
        }
    }
}

impl fmt::Display for LoggerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerSpec::Console => f.write_str("console (stdout)"),
            LoggerSpec::File { path } => write!(f, "file ({}, overwrite)", path.display()),
            LoggerSpec::Gated { day, inner } => match inner {
                Some(_) => write!(f, "gated (only on {day})"),
                None => write!(f, "gated (only on {day}, no inner logger)"),
            },
            LoggerSpec::FanOut { delivery, loggers } => {
                let count = loggers.len();
                let noun = if count == 1 { "logger" } else { "loggers" };
                write!(f, "fan_out ({count} {noun}, {})", delivery.as_str())
            }
        }
    }
}
