//! Phase engine.
//!
//! Classifies an instant as eating or fasting and computes the time left
//! until the next transition. There is no internal state and no timer: the
//! caller polls `evaluate_at` (typically once per second) and renders the
//! result.
//!
//! ## Countdown behaviour
//!
//! ```text
//! window 20:00-12:00
//!   23:00  Eating   13h   (until 12:00)
//!   12:00  Fasting   8h   (half-open: the end minute already fasts)
//!   13:00  Fasting   7h   (until 20:00)
//! ```
//!
//! `until` is always positive. It shrinks as time advances and resets to the
//! full length of the next interval at a transition. For a full-day window
//! the only boundary is `start` itself, so `until` counts down to the next
//! occurrence of `start` and is a full 24h at that exact minute.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::window::{TimeOfDay, TimeWindow, MINUTES_PER_DAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Eating,
    Fasting,
}

impl Phase {
    pub fn opposite(self) -> Phase {
        match self {
            Phase::Eating => Phase::Fasting,
            Phase::Fasting => Phase::Eating,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Phase::Eating => "eating",
            Phase::Fasting => "fasting",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseResult {
    pub phase: Phase,
    /// Time remaining before the next transition.
    pub until: Duration,
}

impl PhaseResult {
    /// Remaining time rounded up to whole minutes.
    pub fn until_minutes(&self) -> i64 {
        (self.until.num_seconds() + 59) / 60
    }

    /// Fraction of the current interval already elapsed, in `[0, 1)`.
    pub fn progress(&self, window: &TimeWindow) -> f64 {
        let interval_minutes = match self.phase {
            Phase::Eating => window.eating_minutes(),
            Phase::Fasting => window.fasting_minutes(),
        };
        let total_secs = i64::from(interval_minutes) * 60;
        if total_secs == 0 {
            return 0.0;
        }
        let elapsed = (total_secs - self.until.num_seconds()).clamp(0, total_secs);
        elapsed as f64 / total_secs as f64
    }
}

/// Evaluate the phase at a minute-granularity time of day.
pub fn evaluate(window: &TimeWindow, now: TimeOfDay) -> PhaseResult {
    let (phase, minutes) = if window.contains(now) {
        (Phase::Eating, window.minutes_until_end(now))
    } else {
        (Phase::Fasting, window.minutes_until_start(now))
    };

    // Zero only occurs for a full-day window queried exactly at its start:
    // the next crossing is a whole day away.
    let minutes = match minutes {
        0 => MINUTES_PER_DAY,
        m => m,
    };

    PhaseResult {
        phase,
        until: Duration::minutes(i64::from(minutes)),
    }
}

/// Evaluate the phase at a wall-clock time with second precision.
///
/// The phase is that of the enclosing minute; `until` is reduced by the
/// seconds already spent in that minute, so it is never below one second.
pub fn evaluate_at(window: &TimeWindow, now: NaiveTime) -> PhaseResult {
    let result = evaluate(window, TimeOfDay::from(now));
    PhaseResult {
        until: result.until - Duration::seconds(i64::from(now.second())),
        ..result
    }
}
