//! Daily eating window.
//!
//! The eating interval is half-open, `[start, end)`. A window whose end is at
//! or before its start crosses midnight ("wrapping"). When `start == end` the
//! window is treated as a full 24-hour eating window with no fasting time:
//! `contains` is always true. This is a deliberate policy for the degenerate
//! case, shared by the phase engine and the dial projector.
//!
//! Every query reduces to one forward offset, `start.minutes_until(t)`,
//! compared against the eating length. There is no separate branch for the
//! wrapping case, so phase classification and dial projection cannot
//! disagree.

use serde::{Deserialize, Serialize};

use super::time_of_day::{TimeOfDay, MINUTES_PER_DAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// True when the eating interval crosses midnight (`end <= start`).
    pub fn is_wrapping(&self) -> bool {
        self.end.minutes() <= self.start.minutes()
    }

    /// True for the degenerate `start == end` window.
    pub fn is_full_day(&self) -> bool {
        self.start == self.end
    }

    /// Length of the eating interval in minutes, in `(0, 1440]`.
    pub fn eating_minutes(&self) -> u16 {
        match self.start.minutes_until(self.end) {
            0 => MINUTES_PER_DAY,
            len => len,
        }
    }

    /// Length of the fasting interval in minutes, in `[0, 1440)`.
    pub fn fasting_minutes(&self) -> u16 {
        MINUTES_PER_DAY - self.eating_minutes()
    }

    /// Minutes elapsed since the most recent `start`, in `[0, 1440)`.
    pub fn minutes_since_start(&self, t: TimeOfDay) -> u16 {
        self.start.minutes_until(t)
    }

    /// Whether `t` lies in the eating interval `[start, end)`.
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.minutes_since_start(t) < self.eating_minutes()
    }

    /// Forward minutes from `t` to the next `end`, in `[0, 1440)`.
    pub fn minutes_until_end(&self, t: TimeOfDay) -> u16 {
        t.minutes_until(self.end)
    }

    /// Forward minutes from `t` to the next `start`, in `[0, 1440)`.
    pub fn minutes_until_start(&self, t: TimeOfDay) -> u16 {
        t.minutes_until(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn non_wrapping_window_is_half_open() {
        let w = TimeWindow::new(hm(8, 0), hm(18, 0));
        assert!(!w.is_wrapping());
        assert!(w.contains(hm(8, 0)));
        assert!(w.contains(hm(17, 59)));
        assert!(!w.contains(hm(18, 0)));
        assert!(!w.contains(hm(7, 59)));
        assert_eq!(w.eating_minutes(), 600);
        assert_eq!(w.fasting_minutes(), 840);
    }

    #[test]
    fn wrapping_window_crosses_midnight() {
        let w = TimeWindow::new(hm(20, 0), hm(12, 0));
        assert!(w.is_wrapping());
        assert!(w.contains(hm(20, 0)));
        assert!(w.contains(hm(23, 59)));
        assert!(w.contains(hm(0, 0)));
        assert!(w.contains(hm(11, 59)));
        assert!(!w.contains(hm(12, 0)));
        assert!(!w.contains(hm(19, 59)));
        assert_eq!(w.eating_minutes(), 16 * 60);
    }

    #[test]
    fn full_day_window_always_contains() {
        let w = TimeWindow::new(hm(9, 0), hm(9, 0));
        assert!(w.is_full_day());
        assert!(w.is_wrapping());
        assert_eq!(w.eating_minutes(), MINUTES_PER_DAY);
        assert_eq!(w.fasting_minutes(), 0);
        assert!(TimeOfDay::every_minute().all(|t| w.contains(t)));
    }

    #[test]
    fn minutes_until_boundaries() {
        let w = TimeWindow::new(hm(20, 0), hm(12, 0));
        assert_eq!(w.minutes_until_end(hm(23, 0)), 13 * 60);
        assert_eq!(w.minutes_until_start(hm(13, 0)), 7 * 60);
        assert_eq!(w.minutes_until_start(hm(20, 0)), 0);
        assert_eq!(w.minutes_until_end(hm(12, 0)), 0);
    }

    #[test]
    fn window_ending_at_midnight() {
        let w = TimeWindow::new(hm(16, 0), TimeOfDay::MIDNIGHT);
        assert!(w.is_wrapping());
        assert!(w.contains(hm(23, 59)));
        assert!(!w.contains(TimeOfDay::MIDNIGHT));
        assert_eq!(w.eating_minutes(), 8 * 60);
    }

    #[test]
    fn serializes_with_hh_mm_fields() {
        let w = TimeWindow::new(hm(20, 0), hm(12, 0));
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"start":"20:00","end":"12:00"}"#);
    }
}
