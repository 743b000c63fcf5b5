//! Configuration settings structures
//!
//! Everything here can be loaded from TOML and overridden from
//! `PATHFINDER_*` environment variables.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::{DaySource, SystemDaySource};
use crate::config::composition::LoggerSpec;
use crate::config::error::ConfigError;
use crate::diagnostics::DiagnosticsConfig;

/// Day source configuration for gated loggers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// IANA time zone used to decide the current weekday; system local
    /// zone when unset
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl ClockConfig {
    /// Builds the wall-clock day source for this configuration
    pub fn day_source(&self) -> Result<Arc<dyn DaySource>, ConfigError> {
        let source = match self.time_zone.as_deref() {
            Some(name) => SystemDaySource::from_name(name).map_err(|e| {
                ConfigError::validation("clock.time_zone", format!("Unknown time zone '{name}': {e}"))
            })?,
            None => SystemDaySource::new(),
        };
        Ok(Arc::new(source))
    }
}

/// Main settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    /// Root of the logger composition
    #[serde(default)]
    pub logger: LoggerSpec,
}
