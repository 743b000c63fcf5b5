//! Configuration loader
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults (serde `default` attributes)
//! 2. One TOML file, if any
//! 3. `PATHFINDER_*` environment variables

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable naming a specific configuration file
pub const CONFIG_FILE_ENV: &str = "PATHFINDER_CONFIG_FILE";

/// File picked up from the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "pathfinder.toml";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PATHFINDER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Loads [`Settings`] from file and environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file to read, if any
    config_file: Option<PathBuf>,
    /// Whether a missing `config_file` is an error
    required: bool,
}

impl ConfigLoader {
    /// Discovers the configuration file
    ///
    /// Uses `PATHFINDER_CONFIG_FILE` when set (the file must exist),
    /// otherwise `pathfinder.toml` in the working directory if present.
    pub fn new() -> Self {
        match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path),
            _ => Self {
                config_file: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
                required: false,
            },
        }
    }

    /// Reads exactly this file, which must exist
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
            required: true,
        }
    }

    /// Skips files entirely; defaults plus environment only
    pub fn defaults_only() -> Self {
        Self {
            config_file: None,
            required: false,
        }
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load and validate settings from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a required configuration file does not exist
    /// - parsing or deserialization fails
    /// - validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref path) = self.config_file {
            if self.required && !path.exists() {
                return Err(ConfigError::file_not_found(format!(
                    "Required configuration file not found: {}",
                    path.display()
                )));
            }

            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(self.required),
            );
        }

        // PATHFINDER_DIAGNOSTICS__LEVEL -> diagnostics.level
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
