mod log_error;
mod multi_error;

pub use log_error::{LogError, LogResult, require};
pub use multi_error::{DestinationFailure, MultiError};
