//! Aggregate error produced by the fan-out logger

use std::fmt;

use super::LogError;

/// A single failed destination inside a fan-out
#[derive(Debug)]
pub struct DestinationFailure {
    /// Position of the failing logger in the fan-out's insertion order
    pub index: usize,
    /// Name reported by the failing logger
    pub logger: &'static str,
    pub error: LogError,
}

/// Every failure from one fan-out call, in insertion order.
///
/// Only built when at least one destination failed; `attempted` records how
/// many loggers were invoked so partial failure stays visible.
#[derive(Debug)]
pub struct MultiError {
    failures: Vec<DestinationFailure>,
    attempted: usize,
}

impl MultiError {
    pub(crate) fn new(failures: Vec<DestinationFailure>, attempted: usize) -> Self {
        debug_assert!(!failures.is_empty());
        Self {
            failures,
            attempted,
        }
    }

    pub fn failures(&self) -> &[DestinationFailure] {
        &self.failures
    }

    /// Number of inner loggers the fan-out invoked
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Positions of the failed loggers
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.index).collect()
    }

    pub fn into_failures(self) -> Vec<DestinationFailure> {
        self.failures
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} loggers failed: ",
            self.failures.len(),
            self.attempted
        )?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "[{}] {}: {}", failure.index, failure.logger, failure.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.failures
            .first()
            .map(|f| &f.error as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn failure(index: usize, logger: &'static str) -> DestinationFailure {
        DestinationFailure {
            index,
            logger,
            error: LogError::io(logger, io::Error::other("boom")),
        }
    }

    #[test]
    fn test_display_lists_every_failure() {
        let multi = MultiError::new(vec![failure(0, "console"), failure(2, "file")], 3);
        assert_eq!(
            multi.to_string(),
            "2 of 3 loggers failed: [0] console: Write to console failed: boom; \
             [2] file: Write to file failed: boom"
        );
    }

    #[test]
    fn test_failed_indices() {
        let multi = MultiError::new(vec![failure(1, "file")], 3);
        assert_eq!(multi.failed_indices(), vec![1]);
        assert_eq!(multi.attempted(), 3);
        assert_eq!(multi.into_failures().len(), 1);
    }
}
