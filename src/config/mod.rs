//! Configuration management
//!
//! Describes which logger composition to build and how the crate reports
//! its own diagnostics.
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults (a plain console logger)
//! 2. The TOML file from `--config`, `PATHFINDER_CONFIG_FILE` or
//!    `./pathfinder.toml`
//! 3. `PATHFINDER_*` environment variables

pub mod composition;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use composition::LoggerSpec;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ClockConfig, Settings};
