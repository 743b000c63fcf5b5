//! Day-gated decorator.
//!
//! Forwards to the wrapped logger only on the gate day. On any other day the
//! message is dropped on purpose and the call still succeeds.

use std::sync::Arc;

use super::traits::{BoxedLogger, ErrorLogger};
use crate::clock::{DaySource, SystemDaySource, Weekday};
use crate::error::{LogResult, require};

/// Logger that only writes on one day of the week
pub struct GatedLogger<L = BoxedLogger> {
    inner: L,
    gate_day: Weekday,
    day_source: Arc<dyn DaySource>,
}

impl<L: ErrorLogger> GatedLogger<L> {
    /// Gates `inner` on Fridays according to the system clock
    pub fn new(inner: L) -> Self {
        Self::with_day_source(inner, Weekday::Friday, Arc::new(SystemDaySource::new()))
    }

    /// Creates a gated logger with an explicit gate day and day source
    ///
    /// # Arguments
    /// * `inner` - The logger messages are forwarded to
    /// * `gate_day` - The only day on which messages pass
    /// * `day_source` - Queried on every call, never cached
    pub fn with_day_source(inner: L, gate_day: Weekday, day_source: Arc<dyn DaySource>) -> Self {
        Self {
            inner,
            gate_day,
            day_source,
        }
    }

    /// Like [`with_day_source`](Self::with_day_source), but fails with
    /// `InvalidArgument` when the inner logger is absent.
    pub fn from_option(
        inner: Option<L>,
        gate_day: Weekday,
        day_source: Arc<dyn DaySource>,
    ) -> LogResult<Self> {
        let inner = require(inner, "gated logger inner logger")?;
        Ok(Self::with_day_source(inner, gate_day, day_source))
    }

    pub fn gate_day(&self) -> Weekday {
        self.gate_day
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Whether a message written right now would be forwarded
    pub fn is_open(&self) -> bool {
        self.day_source.today() == self.gate_day
    }
}

impl<L: ErrorLogger> ErrorLogger for GatedLogger<L> {
    fn write_error(&self, message: &str) -> LogResult<()> {
        let today = self.day_source.today();
        if today != self.gate_day {
            tracing::debug!(
                inner = self.inner.name(),
                %today,
                gate_day = %self.gate_day,
                "Message suppressed by day gate"
            );
            return Ok(());
        }

        self.inner.write_error(message)
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}
