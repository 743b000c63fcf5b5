use std::io;

use thiserror::Error;

use super::MultiError;

/// Error type shared by every logger in the crate.
///
/// Construction problems surface as [`LogError::InvalidArgument`] before a
/// logger exists; everything else is a runtime delivery failure returned
/// from [`ErrorLogger::write_error`](crate::loggers::ErrorLogger::write_error).
#[derive(Error, Debug)]
pub enum LogError {
    /// A required dependency was absent or empty at construction time
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Writing to a concrete destination failed
    #[error("Write to {destination} failed: {source}")]
    Io {
        destination: String,
        #[source]
        source: io::Error,
    },

    /// One or more fan-out destinations failed
    #[error(transparent)]
    Multi(#[from] MultiError),
}

impl LogError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn io(destination: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            destination: destination.into(),
            source,
        }
    }

    /// True for construction-time failures
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns the aggregate when this error came from a fan-out
    pub fn as_multi(&self) -> Option<&MultiError> {
        match self {
            Self::Multi(multi) => Some(multi),
            _ => None,
        }
    }
}

/// Type alias for Result with LogError
pub type LogResult<T> = Result<T, LogError>;

/// Unwraps a required dependency or fails with `InvalidArgument` naming it.
pub fn require<T>(value: Option<T>, what: &str) -> LogResult<T> {
    value.ok_or_else(|| LogError::invalid_argument(format!("{what} is required")))
}
