use chrono::NaiveTime;
use clap::Args;
use fastdial_core::{snapshot, Config};

use super::{local_now, parse_clock, WindowArgs};

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Evaluate at this wall-clock time (HH:MM or HH:MM:SS) instead of now
    #[arg(long, value_parser = parse_clock)]
    pub at: Option<NaiveTime>,
    #[command(flatten)]
    pub window: WindowArgs,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let window = args.window.resolve(&config);
    let now = args.at.unwrap_or_else(local_now);

    let event = snapshot(&window, now);
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
