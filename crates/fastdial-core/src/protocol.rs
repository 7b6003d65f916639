//! Named fasting protocols.
//!
//! A protocol is only a label plus a suggested eating length. The engine
//! never looks at it; the configured `TimeWindow` is what drives the math.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::window::{TimeOfDay, TimeWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum FastingProtocol {
    /// 16 hours fasting, 8 hours eating.
    #[default]
    SixteenEight,
    EighteenSix,
    TwentyFour,
    /// One meal a day: 23 hours fasting, 1 hour eating.
    Omad,
    /// Window set by hand.
    Custom,
}

impl FastingProtocol {
    pub const PRESETS: [FastingProtocol; 4] = [
        FastingProtocol::SixteenEight,
        FastingProtocol::EighteenSix,
        FastingProtocol::TwentyFour,
        FastingProtocol::Omad,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FastingProtocol::SixteenEight => "16:8",
            FastingProtocol::EighteenSix => "18:6",
            FastingProtocol::TwentyFour => "20:4",
            FastingProtocol::Omad => "OMAD",
            FastingProtocol::Custom => "custom",
        }
    }

    /// Suggested eating hours, `None` for `Custom`.
    pub fn eating_hours(self) -> Option<u32> {
        match self {
            FastingProtocol::SixteenEight => Some(8),
            FastingProtocol::EighteenSix => Some(6),
            FastingProtocol::TwentyFour => Some(4),
            FastingProtocol::Omad => Some(1),
            FastingProtocol::Custom => None,
        }
    }

    pub fn fasting_hours(self) -> Option<u32> {
        self.eating_hours().map(|h| 24 - h)
    }

    /// Eating window of this protocol's length starting at `start`.
    pub fn window_from(self, start: TimeOfDay) -> Option<TimeWindow> {
        let hours = self.eating_hours()?;
        Some(TimeWindow::new(start, start.plus_minutes(hours * 60)))
    }

    /// Eating window of this protocol's length ending at `end`.
    pub fn window_ending_at(self, end: TimeOfDay) -> Option<TimeWindow> {
        let fasting_hours = self.fasting_hours()?;
        Some(TimeWindow::new(end.plus_minutes(fasting_hours * 60), end))
    }
}

impl fmt::Display for FastingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FastingProtocol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "16:8" => Ok(FastingProtocol::SixteenEight),
            "18:6" => Ok(FastingProtocol::EighteenSix),
            "20:4" => Ok(FastingProtocol::TwentyFour),
            "omad" | "23:1" => Ok(FastingProtocol::Omad),
            "custom" => Ok(FastingProtocol::Custom),
            _ => Err(ValidationError::InvalidFormat {
                what: "fasting protocol (16:8, 18:6, 20:4, OMAD, custom)",
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FastingProtocol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FastingProtocol> for String {
    fn from(protocol: FastingProtocol) -> Self {
        protocol.label().to_string()
    }
}
