//! Check command handler
//!
//! Validates the configuration and shows what would be built.

use std::sync::Arc;

use crate::clock::DaySource;
use crate::config::settings::Settings;
use crate::error::LogResult;

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
    day_source: Arc<dyn DaySource>,
}

impl CheckCommandHandler {
    pub fn new(config: Settings, day_source: Arc<dyn DaySource>) -> Self {
        Self { config, day_source }
    }

    /// Print the report; nothing is written to any logger
    pub fn execute(&self) -> LogResult<()> {
        print!("{}", self.report()?);
        Ok(())
    }

    /// Builds the composition (without writing) and describes it
    pub fn report(&self) -> LogResult<String> {
        self.config.logger.build(&self.day_source)?;

        let today = self.day_source.today();
        let zone = self.config.clock.time_zone.as_deref().unwrap_or("system");

        Ok(format!(
            "✓ Configuration is valid\n\
             ✓ Diagnostics: level={}, format={}\n\
             ✓ Today is {today} (time zone: {zone})\n\
             Logger composition:\n{}",
            self.config.diagnostics.level,
            self.config.diagnostics.format.as_str(),
            self.config.logger.describe()
        ))
    }
}
