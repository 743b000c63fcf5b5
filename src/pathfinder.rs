//! Caller that reports through whatever logger it was given.

use crate::error::{LogResult, require};
use crate::loggers::{BoxedLogger, ErrorLogger};

/// Forwards messages to one logger, nothing more
pub struct Pathfinder<L = BoxedLogger> {
    logger: L,
}

impl<L: ErrorLogger> Pathfinder<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Fails with `InvalidArgument` when no logger is supplied
    pub fn from_option(logger: Option<L>) -> LogResult<Self> {
        Ok(Self::new(require(logger, "pathfinder logger")?))
    }

    /// Hands `message` to the logger and returns its result untouched
    pub fn find(&self, message: &str) -> LogResult<()> {
        self.logger.write_error(message)
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }
}
