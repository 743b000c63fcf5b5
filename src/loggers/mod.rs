//! Composable error loggers.
//!
//! [`ErrorLogger`] is the single capability. [`ConsoleLogger`] and
//! [`FileLogger`] are concrete backends; [`GatedLogger`] and
//! [`FanOutLogger`] are decorators that own the loggers they wrap and add
//! policy on top:
//!
//! ```ignore
//! let logger = FanOutLogger::new(vec![
//!     Box::new(ConsoleLogger::new()) as BoxedLogger,
//!     Box::new(GatedLogger::new(FileLogger::new("log.txt"))),
//! ])?;
//! logger.write_error("disk on fire")?;
//! ```

mod console;
mod fan_out;
mod file;
mod gated;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;


pub use console::{ConsoleLogger, StdoutTarget, StdoutWriter};
pub use fan_out::{Delivery, FanOutLogger};
pub use file::FileLogger;
pub use gated::GatedLogger;
pub use traits::{BoxedLogger, ErrorLogger};
