//! Angle arithmetic for the 24-hour dial.

use crate::window::{TimeOfDay, MINUTES_PER_DAY};

pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Degrees covered by one minute on a 24-hour dial. A power of two, so
/// minute-quantized angles are exact in `f64`.
pub const DEGREES_PER_MINUTE: f64 = FULL_TURN_DEGREES / MINUTES_PER_DAY as f64;

/// Reduce `degrees` into `[0, 360)` using true modulo (`-10` becomes `350`).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if normalized >= FULL_TURN_DEGREES {
        0.0
    } else {
        normalized
    }
}

/// Dial angle of a time of day: 00:00 at the top, 06:00 at 90°, 12:00 at 180°.
pub fn time_to_degrees(t: TimeOfDay) -> f64 {
    f64::from(t.minutes()) * DEGREES_PER_MINUTE
}

/// Dial angle of the "now" hand with sub-minute precision.
pub fn hand_degrees(now: chrono::NaiveTime) -> f64 {
    use chrono::Timelike;
    let seconds = f64::from(now.num_seconds_from_midnight());
    normalize_degrees(seconds / 60.0 * DEGREES_PER_MINUTE)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert a dial angle to canvas radians, where 0 points to 3 o'clock and
/// angles grow clockwise (the convention of most 2D canvas `arc` calls).
pub fn dial_to_canvas_radians(degrees: f64) -> f64 {
    degrees_to_radians(degrees - 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn normalize_uses_true_modulo() {
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
        let tiny = normalize_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn time_to_degrees_reference_points() {
        assert_eq!(time_to_degrees(TimeOfDay::MIDNIGHT), 0.0);
        assert_eq!(time_to_degrees(hm(6, 0)), 90.0);
        assert_eq!(time_to_degrees(hm(12, 0)), 180.0);
        assert_eq!(time_to_degrees(hm(18, 0)), 270.0);
        assert_eq!(time_to_degrees(hm(23, 59)), 359.75);
    }

    #[test]
    fn hand_moves_within_a_minute() {
        let start = hand_degrees(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        let half = hand_degrees(NaiveTime::from_hms_opt(12, 0, 30).unwrap());
        assert_eq!(start, 180.0);
        assert!((half - 180.125).abs() < 1e-9);
    }

    #[test]
    fn canvas_radians_start_at_three_o_clock() {
        assert!((dial_to_canvas_radians(0.0) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(dial_to_canvas_radians(90.0).abs() < 1e-12);
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
    }
}
