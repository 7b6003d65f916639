//! Countdown poller.
//!
//! Re-evaluates the phase on a fixed cadence. The engine holds no state, so
//! the last seen phase lives here; a missed or late tick only delays the
//! display, the next value is still correct.

use std::time::Duration;

use chrono::{NaiveTime, Utc};
use clap::Args;
use fastdial_core::{evaluate_at, Config, Event, Phase, PhaseResult, TimeWindow};
use tokio::time::MissedTickBehavior;

use super::{format_countdown, local_now, WindowArgs};

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Stop after this many ticks (runs until interrupted by default)
    #[arg(long)]
    pub ticks: Option<u64>,
    #[command(flatten)]
    pub window: WindowArgs,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let window = args.window.resolve(&config);
    let period = Duration::from_secs(config.display.tick_interval_secs);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(poll(window, period, args.ticks, config.display.show_seconds))
}

async fn poll(
    window: TimeWindow,
    period: Duration,
    ticks: Option<u64>,
    show_seconds: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut previous: Option<Phase> = None;
    let mut count = 0u64;
    while ticks.map_or(true, |limit| count < limit) {
        interval.tick().await;
        count += 1;

        let now = local_now();
        let result = evaluate_at(&window, now);
        tracing::trace!(
            %now,
            phase = %result.phase,
            until_secs = result.until.num_seconds(),
            "tick"
        );

        if let Some(event) = phase_change(previous, &result, now) {
            tracing::info!(from = %result.phase.opposite(), to = %result.phase, "phase changed");
            println!("{}", serde_json::to_string(&event)?);
        }
        println!("{}", countdown_line(&window, &result, show_seconds));
        previous = Some(result.phase);
    }
    Ok(())
}

fn phase_change(previous: Option<Phase>, result: &PhaseResult, now: NaiveTime) -> Option<Event> {
    match previous {
        Some(from) if from != result.phase => Some(Event::PhaseChanged {
            from,
            to: result.phase,
            now,
            at: Utc::now(),
        }),
        _ => None,
    }
}

fn countdown_line(window: &TimeWindow, result: &PhaseResult, show_seconds: bool) -> String {
    format!(
        "{:<7} {} left ({:.0}%)",
        result.phase,
        format_countdown(result.until, show_seconds),
        result.progress(window) * 100.0
    )
}
