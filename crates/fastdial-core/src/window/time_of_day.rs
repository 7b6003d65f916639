//! Wall-clock time of day with minute granularity.
//!
//! A `TimeOfDay` carries no date and no timezone. It is stored as minutes
//! since midnight and is only ever compared by that integer. Out-of-range
//! values are rejected on construction so the engine never sees them.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Number of minutes in one day; the modulus of every dial computation.
pub const MINUTES_PER_DAY: u16 = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Build from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] unless `0 <= minutes < 1440`.
    pub fn new(minutes: i64) -> Result<Self, ValidationError> {
        if (0..i64::from(MINUTES_PER_DAY)).contains(&minutes) {
            Ok(Self {
                minutes: minutes as u16,
            })
        } else {
            Err(ValidationError::InvalidArgument {
                field: "minutes",
                value: minutes,
                limit: i64::from(MINUTES_PER_DAY),
            })
        }
    }

    /// Build from an hour (0-23) and minute (0-59).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] naming the offending field.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour >= 24 {
            return Err(ValidationError::InvalidArgument {
                field: "hour",
                value: i64::from(hour),
                limit: 24,
            });
        }
        if minute >= 60 {
            return Err(ValidationError::InvalidArgument {
                field: "minute",
                value: i64::from(minute),
                limit: 60,
            });
        }
        Self::new(i64::from(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }

    /// Forward (clockwise) minutes from `self` to `target`, in `[0, 1440)`.
    pub fn minutes_until(self, target: TimeOfDay) -> u16 {
        let day = i32::from(MINUTES_PER_DAY);
        (i32::from(target.minutes) - i32::from(self.minutes)).rem_euclid(day) as u16
    }

    /// The time `minutes` later, wrapping past midnight.
    pub fn plus_minutes(self, minutes: u32) -> TimeOfDay {
        let day = u32::from(MINUTES_PER_DAY);
        TimeOfDay {
            minutes: ((u32::from(self.minutes) + minutes % day) % day) as u16,
        }
    }

    /// Every minute of the day, starting at midnight.
    pub fn every_minute() -> impl Iterator<Item = TimeOfDay> {
        (0..MINUTES_PER_DAY).map(|minutes| TimeOfDay { minutes })
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds and below.
    fn from(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Parses `HH:MM` (a single-digit hour is accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat {
            what: "time of day (expected HH:MM)",
            input: s.to_string(),
        };

        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
