//! Fan-out decorator.
//!
//! Forwards every message to all wrapped loggers. A failing destination never
//! stops delivery to the others; every failure is collected into a single
//! [`MultiError`].

use std::io;
use std::thread::{self, ScopedJoinHandle};

use serde::{Deserialize, Serialize};

use super::traits::{BoxedLogger, ErrorLogger};
use crate::error::{DestinationFailure, LogError, LogResult, MultiError, require};

/// How a fan-out drives its inner loggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    /// One after another, in insertion order
    #[default]
    Sequential,
    /// One scoped thread per inner logger, all joined before returning
    Concurrent,
}

impl Delivery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delivery::Sequential => "sequential",
            Delivery::Concurrent => "concurrent",
        }
    }
}

/// Logger that writes every message to an ordered set of loggers
pub struct FanOutLogger<L = BoxedLogger> {
    loggers: Vec<L>,
    delivery: Delivery,
}

impl<L: ErrorLogger> FanOutLogger<L> {
    /// Creates a sequential fan-out
    ///
    /// # Errors
    /// `InvalidArgument` when `loggers` is empty
    pub fn new(loggers: Vec<L>) -> LogResult<Self> {
        Self::with_delivery(loggers, Delivery::Sequential)
    }

    pub fn with_delivery(loggers: Vec<L>, delivery: Delivery) -> LogResult<Self> {
        if loggers.is_empty() {
            return Err(LogError::invalid_argument(
                "fan-out logger needs at least one inner logger",
            ));
        }

        Ok(Self { loggers, delivery })
    }

    /// Builds a fan-out from possibly-absent members.
    ///
    /// Fails with `InvalidArgument` on the first absent member, naming its
    /// position, or when the collection itself is absent or empty.
    pub fn from_options(loggers: Option<Vec<Option<L>>>, delivery: Delivery) -> LogResult<Self> {
        let loggers = require(loggers, "fan-out logger collection")?
            .into_iter()
            .enumerate()
            .map(|(index, logger)| require(logger, &format!("fan-out logger member {index}")))
            .collect::<LogResult<Vec<_>>>()?;

        Self::with_delivery(loggers, delivery)
    }

    pub fn loggers(&self) -> &[L] {
        &self.loggers
    }

    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Always false; construction rejects empty fan-outs
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    fn deliver_sequential(&self, message: &str) -> Vec<LogResult<()>> {
        self.loggers
            .iter()
            .map(|logger| logger.write_error(message))
            .collect()
    }

    fn deliver_concurrent(&self, message: &str) -> Vec<LogResult<()>> {
        thread::scope(|scope| {
            let handles: Vec<_> = self
                .loggers
                .iter()
                .map(|logger| {
                    let spawned = thread::Builder::new()
                        .name(format!("fan-out-{}", logger.name()))
                        .spawn_scoped(scope, move || logger.write_error(message));
                    (logger.name(), spawned)
                })
                .collect();

            handles
                .into_iter()
                .map(|(name, spawned)| settle(name, spawned))
                .collect()
        })
    }
}

/// Outcome of one concurrent delivery slot.
///
/// A thread that could not be started or that panicked counts as an I/O
/// failure of that logger.
fn settle(
    name: &'static str,
    spawned: io::Result<ScopedJoinHandle<'_, LogResult<()>>>,
) -> LogResult<()> {
    match spawned {
        Ok(handle) => handle
            .join()
            .unwrap_or_else(|_| Err(LogError::io(name, io::Error::other("logger panicked")))),
        Err(e) => Err(LogError::io(name, e)),
    }
}

impl<L: ErrorLogger> ErrorLogger for FanOutLogger<L> {
    fn write_error(&self, message: &str) -> LogResult<()> {
        let results = match self.delivery {
            Delivery::Sequential => self.deliver_sequential(message),
            Delivery::Concurrent => self.deliver_concurrent(message),
        };

        let failures: Vec<DestinationFailure> = results
            .into_iter()
            .zip(&self.loggers)
            .enumerate()
            .filter_map(|(index, (result, logger))| {
                result.err().map(|error| DestinationFailure {
                    index,
                    logger: logger.name(),
                    error,
                })
            })
            .collect();

        if failures.is_empty() {
            tracing::debug!(
                destinations = self.loggers.len(),
                delivery = self.delivery.as_str(),
                "Message delivered to all loggers"
            );
            return Ok(());
        }

        for failure in &failures {
            tracing::warn!(
                index = failure.index,
                logger = failure.logger,
                error = %failure.error,
                "Fan-out destination failed"
            );
        }

        Err(MultiError::new(failures, self.loggers.len()).into())
    }

    fn name(&self) -> &'static str {
        "fan_out"
    }
}
