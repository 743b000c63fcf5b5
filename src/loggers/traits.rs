//! ErrorLogger trait definition.

use std::sync::Arc;

use crate::error::LogResult;

/// The single logging capability: record an error message somewhere.
///
/// Backends write to a concrete destination; decorators wrap other loggers
/// and decide whether and where to forward. All loggers must be
/// `Send + Sync` so compositions can be shared across threads and driven by
/// the concurrent fan-out.
///
/// # Example Implementation
/// ```ignore
/// pub struct NullLogger;
///
/// impl ErrorLogger for NullLogger {
///     fn write_error(&self, _message: &str) -> LogResult<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "null"
///     }
/// }
/// ```
pub trait ErrorLogger: Send + Sync {
    /// Records `message`; any string is accepted, including the empty one.
    fn write_error(&self, message: &str) -> LogResult<()>;

    /// Identifier used in failure reports and diagnostics
    fn name(&self) -> &'static str;
}

impl<L: ErrorLogger + ?Sized> ErrorLogger for Box<L> {
    fn write_error(&self, message: &str) -> LogResult<()> {
        (**self).write_error(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<L: ErrorLogger + ?Sized> ErrorLogger for Arc<L> {
    fn write_error(&self, message: &str) -> LogResult<()> {
        (**self).write_error(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Owned trait object, the currency of composed logger trees
pub type BoxedLogger = Box<dyn ErrorLogger>;
