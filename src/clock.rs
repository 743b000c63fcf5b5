//! Day-of-week sources for time-gated loggers
//!
//! The gated logger never reads the wall clock directly; it asks a
//! [`DaySource`] at call time. Production code uses [`SystemDaySource`],
//! tests and the `--today` CLI override use [`FixedDay`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use jiff::Timestamp;
use jiff::civil;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

/// Day of the week, Monday first
///
/// Parsed the same way from config files and the command line: full names
/// or three-letter abbreviations, any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    #[default]
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl From<civil::Weekday> for Weekday {
    fn from(day: civil::Weekday) -> Self {
        match day {
            civil::Weekday::Monday => Weekday::Monday,
            civil::Weekday::Tuesday => Weekday::Tuesday,
            civil::Weekday::Wednesday => Weekday::Wednesday,
            civil::Weekday::Thursday => Weekday::Thursday,
            civil::Weekday::Friday => Weekday::Friday,
            civil::Weekday::Saturday => Weekday::Saturday,
            civil::Weekday::Sunday => Weekday::Sunday,
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == lower || day.as_str()[..3] == lower)
            .ok_or_else(|| {
                format!(
                    "Invalid weekday '{}'. Valid values are: monday..sunday or mon..sun",
                    s
                )
            })
    }
}

impl TryFrom<String> for Weekday {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of "what day is it now"
pub trait DaySource: Send + Sync {
    fn today(&self) -> Weekday;
}

impl<D: DaySource + ?Sized> DaySource for Arc<D> {
    fn today(&self) -> Weekday {
        (**self).today()
    }
}

impl<D: DaySource + ?Sized> DaySource for Box<D> {
    fn today(&self) -> Weekday {
        (**self).today()
    }
}

/// Wall-clock day source, evaluated in a fixed time zone
#[derive(Debug, Clone)]
pub struct SystemDaySource {
    time_zone: TimeZone,
}

impl SystemDaySource {
    /// Uses the system's local time zone
    pub fn new() -> Self {
        Self {
            time_zone: TimeZone::system(),
        }
    }

    pub fn with_time_zone(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// Looks up an IANA time zone name such as `Europe/Berlin`
    pub fn from_name(name: &str) -> Result<Self, jiff::Error> {
        Ok(Self::with_time_zone(TimeZone::get(name)?))
    }
}

impl Default for SystemDaySource {
    fn default() -> Self {
        Self::new()
    }
}

impl DaySource for SystemDaySource {
    fn today(&self) -> Weekday {
        Timestamp::now()
            .to_zoned(self.time_zone.clone())
            .weekday()
            .into()
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDay(pub Weekday);

impl DaySource for FixedDay {
    fn today(&self) -> Weekday {
        self.0
    }
}
