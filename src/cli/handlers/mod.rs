//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod check;
pub mod demo;
pub mod find;

pub use check::CheckCommandHandler;
pub use demo::{DemoCommandHandler, DemoOutcome};
pub use find::FindCommandHandler;
