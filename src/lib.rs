//! Pathfinder-Log Library
//!
//! Composable error loggers: console and file backends, a day-gated
//! decorator and a fan-out decorator that reports every failed destination.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod loggers;
pub mod pathfinder;

pub use error::{LogError, LogResult, MultiError};
pub use loggers::{
    BoxedLogger, ConsoleLogger, Delivery, ErrorLogger, FanOutLogger, FileLogger, GatedLogger,
};
pub use pathfinder::Pathfinder;
