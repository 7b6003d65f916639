//! Projection of an eating window onto the 24-hour dial.
//!
//! The two arcs tile the dial: the fasting arc starts where the eating arc
//! ends and the sweeps add up to exactly 360°. Angles are minute-quantized
//! multiples of 0.25°, so the arithmetic below is exact.

use serde::{Deserialize, Serialize};

use super::clock::{
    dial_to_canvas_radians, normalize_degrees, time_to_degrees, FULL_TURN_DEGREES,
};
use crate::phase::Phase;
use crate::window::TimeWindow;

/// A sector of the dial, clockwise from `start_degrees`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub start_degrees: f64,
    pub sweep_degrees: f64,
}

impl Arc {
    pub fn end_degrees(&self) -> f64 {
        normalize_degrees(self.start_degrees + self.sweep_degrees)
    }

    /// A zero-sweep arc is absent and must not be drawn.
    pub fn is_visible(&self) -> bool {
        self.sweep_degrees > 0.0
    }

    /// Whether the dial angle lies in `[start, start + sweep)`.
    pub fn contains(&self, degrees: f64) -> bool {
        normalize_degrees(degrees - self.start_degrees) < self.sweep_degrees
    }

    /// `(start, sweep)` in canvas radians (0 at 3 o'clock, clockwise).
    pub fn to_canvas_radians(&self) -> (f64, f64) {
        (
            dial_to_canvas_radians(self.start_degrees),
            self.sweep_degrees.to_radians(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneProjection {
    pub eating: Arc,
    pub fasting: Arc,
}

impl ZoneProjection {
    /// Phase of the zone covering a dial angle.
    pub fn phase_at(&self, degrees: f64) -> Phase {
        if self.eating.contains(degrees) {
            Phase::Eating
        } else {
            Phase::Fasting
        }
    }

    pub fn arc(&self, phase: Phase) -> &Arc {
        match phase {
            Phase::Eating => &self.eating,
            Phase::Fasting => &self.fasting,
        }
    }
}

/// Project a window onto the dial.
///
/// A full-day window (`start == end`) yields a 360° eating arc and an
/// invisible zero-sweep fasting arc.
pub fn project(window: &TimeWindow) -> ZoneProjection {
    let eating_start = time_to_degrees(window.start());
    let eating_sweep = match normalize_degrees(time_to_degrees(window.end()) - eating_start) {
        sweep if sweep == 0.0 => FULL_TURN_DEGREES,
        sweep => sweep,
    };

    ZoneProjection {
        eating: Arc {
            start_degrees: eating_start,
            sweep_degrees: eating_sweep,
        },
        fasting: Arc {
            start_degrees: normalize_degrees(eating_start + eating_sweep),
            sweep_degrees: FULL_TURN_DEGREES - eating_sweep,
        },
    }
}
