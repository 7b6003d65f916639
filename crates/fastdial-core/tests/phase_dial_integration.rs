//! Integration tests for the phase engine and the dial projector.
//!
//! The engine and the projector are separate views over one window; these
//! tests check that they never disagree.

use chrono::{Duration, NaiveTime};
use fastdial_core::dial::clock::time_to_degrees;
use fastdial_core::{
    evaluate, evaluate_at, project, Phase, TimeOfDay, TimeWindow, MINUTES_PER_DAY,
};
use proptest::prelude::*;

fn hm(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::from_hm(h, m).unwrap()
}

fn minute(m: i64) -> TimeOfDay {
    TimeOfDay::new(m).unwrap()
}

fn windows_of_interest() -> Vec<TimeWindow> {
    vec![
        TimeWindow::new(hm(20, 0), hm(12, 0)),
        TimeWindow::new(hm(8, 0), hm(18, 0)),
        TimeWindow::new(hm(9, 0), hm(9, 0)),
        TimeWindow::new(TimeOfDay::MIDNIGHT, hm(23, 59)),
        TimeWindow::new(hm(23, 59), TimeOfDay::MIDNIGHT),
        TimeWindow::new(hm(16, 0), TimeOfDay::MIDNIGHT),
        TimeWindow::new(TimeOfDay::MIDNIGHT, TimeOfDay::MIDNIGHT),
    ]
}

#[test]
fn wraparound_reference_case() {
    let w = TimeWindow::new(hm(20, 0), hm(12, 0));
    let cases = [
        (hm(23, 0), Phase::Eating, 13),
        (hm(13, 0), Phase::Fasting, 7),
        (hm(12, 0), Phase::Fasting, 8),
    ];
    for (now, phase, hours) in cases {
        let r = evaluate(&w, now);
        assert_eq!(r.phase, phase, "phase at {now}");
        assert_eq!(r.until, Duration::hours(hours), "until at {now}");
    }
}

#[test]
fn non_wrapping_reference_case() {
    let w = TimeWindow::new(hm(8, 0), hm(18, 0));
    let r = evaluate(&w, hm(10, 0));
    assert_eq!((r.phase, r.until), (Phase::Eating, Duration::hours(8)));
    let r = evaluate(&w, hm(19, 0));
    assert_eq!((r.phase, r.until), (Phase::Fasting, Duration::hours(13)));
}

#[test]
fn full_day_window_is_always_eating() {
    let w = TimeWindow::new(hm(9, 0), hm(9, 0));
    let zones = project(&w);
    assert_eq!(zones.eating.sweep_degrees, 360.0);
    assert_eq!(zones.fasting.sweep_degrees, 0.0);
    assert!(!zones.fasting.is_visible());
    for now in TimeOfDay::every_minute() {
        assert_eq!(evaluate(&w, now).phase, Phase::Eating);
    }
}

#[test]
fn angle_reference_points() {
    assert_eq!(time_to_degrees(hm(0, 0)), 0.0);
    assert_eq!(time_to_degrees(hm(12, 0)), 180.0);
    assert_eq!(time_to_degrees(hm(18, 0)), 270.0);
}

#[test]
fn agreement_over_evenly_sampled_day() {
    for w in windows_of_interest() {
        let zones = project(&w);
        for i in 0..1000u32 {
            let now = minute(i64::from(i * u32::from(MINUTES_PER_DAY) / 1000));
            let angle = time_to_degrees(now);
            let phase = evaluate(&w, now).phase;
            assert_eq!(zones.phase_at(angle), phase, "window {w:?} at {now}");
            assert!(zones.arc(phase).contains(angle));
            assert!(!zones.arc(phase.opposite()).contains(angle));
        }
    }
}

#[test]
fn countdown_decreases_by_one_minute_between_transitions() {
    for w in windows_of_interest() {
        let mut previous = evaluate(&w, TimeOfDay::MIDNIGHT);
        for now in TimeOfDay::every_minute().skip(1) {
            let current = evaluate(&w, now);
            if current.phase == previous.phase && current.until < previous.until {
                assert_eq!(previous.until - current.until, Duration::minutes(1));
            } else {
                // Transition, or the full-day window rolling over at its start.
                assert_eq!(previous.until, Duration::minutes(1), "window {w:?} at {now}");
            }
            previous = current;
        }
    }
}

#[test]
fn second_precision_countdown_never_goes_negative() {
    let w = TimeWindow::new(hm(20, 0), hm(12, 0));
    let mut previous = evaluate_at(&w, NaiveTime::from_hms_opt(11, 58, 0).unwrap());
    for secs in 1..180 {
        let now = NaiveTime::from_hms_opt(11, 58, 0).unwrap() + Duration::seconds(secs);
        let current = evaluate_at(&w, now);
        assert!(current.until > Duration::zero());
        if current.phase == previous.phase {
            assert_eq!(previous.until - current.until, Duration::seconds(1));
        } else {
            assert_eq!(current.phase, Phase::Fasting);
            assert_eq!(current.until, Duration::hours(8));
        }
        previous = current;
    }
}

proptest! {
    #[test]
    fn partition_property(start in 0i64..1440, end in 0i64..1440, now in 0i64..1440) {
        let w = TimeWindow::new(minute(start), minute(end));
        let r = evaluate(&w, minute(now));
        prop_assert!(matches!(r.phase, Phase::Eating | Phase::Fasting));
        prop_assert!(r.until > Duration::zero());
        prop_assert!(r.until <= Duration::minutes(1440));
        if !w.is_full_day() {
            prop_assert!(r.until < Duration::minutes(1440));
        }
        prop_assert_eq!(r.phase == Phase::Eating, w.contains(minute(now)));
    }

    #[test]
    fn agreement_property(start in 0i64..1440, end in 0i64..1440, now in 0i64..1440) {
        let w = TimeWindow::new(minute(start), minute(end));
        let zones = project(&w);
        let phase = evaluate(&w, minute(now)).phase;
        prop_assert_eq!(zones.phase_at(time_to_degrees(minute(now))), phase);
    }

    #[test]
    fn sweep_sum_property(start in 0i64..1440, end in 0i64..1440) {
        let zones = project(&TimeWindow::new(minute(start), minute(end)));
        prop_assert_eq!(zones.eating.sweep_degrees + zones.fasting.sweep_degrees, 360.0);
        prop_assert!(zones.eating.sweep_degrees > 0.0);
        prop_assert!(zones.eating.sweep_degrees <= 360.0);
        prop_assert!((0.0..360.0).contains(&zones.fasting.start_degrees));
        prop_assert_eq!(zones.fasting.start_degrees, zones.eating.end_degrees());
    }

    #[test]
    fn until_matches_interval_lengths(start in 0i64..1440, end in 0i64..1440) {
        let w = TimeWindow::new(minute(start), minute(end));
        let at_start = evaluate(&w, w.start());
        prop_assert_eq!(at_start.phase, Phase::Eating);
        prop_assert_eq!(at_start.until, Duration::minutes(i64::from(w.eating_minutes())));
        if !w.is_full_day() {
            let at_end = evaluate(&w, w.end());
            prop_assert_eq!(at_end.phase, Phase::Fasting);
            prop_assert_eq!(at_end.until, Duration::minutes(i64::from(w.fasting_minutes())));
        }
    }
}
