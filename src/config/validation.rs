//! Configuration validation logic
//!
//! Validation runs after loading so that problems are reported with the
//! dotted path of the offending field instead of surfacing later as a
//! construction failure.

use crate::config::error::ConfigError;
use crate::config::settings::{ClockConfig, Settings};
use crate::diagnostics::DiagnosticsConfig;

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_diagnostics(&self.diagnostics)?;
        self.clock.validate()?;
        self.logger.validate("logger")?;
        Ok(())
    }
}

impl ClockConfig {
    /// Validate clock configuration
    ///
    /// # Validation Rules
    /// - Time zone, when set, must be a known IANA name
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.day_source().map(|_| ())
    }
}

fn validate_diagnostics(config: &DiagnosticsConfig) -> Result<(), ConfigError> {
    config
        .validate()
        .map_err(|e| ConfigError::validation("diagnostics.level", format!("{e:#}")))
}
