use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dial::clock::hand_degrees;
use crate::dial::{project, Arc};
use crate::phase::{evaluate_at, Phase};
use crate::window::TimeWindow;

/// Renderer-facing output. The renderer draws and labels from these
/// values only; it never derives the phase on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    PhaseSnapshot {
        phase: Phase,
        until_secs: i64,
        progress: f64,
        window: TimeWindow,
        eating: Arc,
        fasting: Arc,
        /// Dial angle of the "now" marker.
        hand_degrees: f64,
        /// Wall-clock time the snapshot was computed for.
        now: NaiveTime,
        at: DateTime<Utc>,
    },
    /// Emitted by a poller when two consecutive snapshots disagree.
    PhaseChanged {
        from: Phase,
        to: Phase,
        now: NaiveTime,
        at: DateTime<Utc>,
    },
}

/// Build a full snapshot for `now` from the phase engine and the projector.
pub fn snapshot(window: &TimeWindow, now: NaiveTime) -> Event {
    let result = evaluate_at(window, now);
    let zones = project(window);
    Event::PhaseSnapshot {
        phase: result.phase,
        until_secs: result.until.num_seconds(),
        progress: result.progress(window),
        window: *window,
        eating: zones.eating,
        fasting: zones.fasting,
        hand_degrees: hand_degrees(now),
        now,
        at: Utc::now(),
    }
}
