pub mod config;
pub mod dial;
pub mod protocol;
pub mod status;
pub mod watch;

use chrono::NaiveTime;
use clap::Args;
use fastdial_core::{Config, TimeOfDay, TimeWindow};

/// Window overrides shared by the read-only commands.
#[derive(Args, Debug, Default)]
pub struct WindowArgs {
    /// Eating window start (HH:MM); defaults to the configured value
    #[arg(long)]
    pub start: Option<TimeOfDay>,
    /// Eating window end (HH:MM); defaults to the configured value
    #[arg(long)]
    pub end: Option<TimeOfDay>,
}

impl WindowArgs {
    /// The window to evaluate: overrides first, configuration otherwise.
    pub fn resolve(&self, config: &Config) -> TimeWindow {
        let window = TimeWindow::new(
            self.start.unwrap_or(config.fasting.eating_start),
            self.end.unwrap_or(config.fasting.eating_end),
        );
        tracing::debug!(start = %window.start(), end = %window.end(), "resolved eating window");
        window
    }
}

/// Parse `HH:MM:SS` or `HH:MM`.
pub fn parse_clock(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| format!("invalid time '{s}', expected HH:MM or HH:MM:SS"))
}

pub fn local_now() -> NaiveTime {
    chrono::Local::now().time()
}

/// `HH:MM:SS` (or `HH:MM` without seconds) for a countdown.
pub fn format_countdown(until: chrono::Duration, show_seconds: bool) -> String {
    let total = until.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);
    if show_seconds {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        let rounded = (total + 59) / 60;
        format!("{:02}:{:02}", rounded / 60, rounded % 60)
    }
}
