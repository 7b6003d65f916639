use clap::Args;
use fastdial_core::{project, Arc, Config};
use serde::Serialize;

use super::WindowArgs;

#[derive(Args, Debug)]
pub struct DialArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

/// An arc in both dial degrees and canvas radians.
#[derive(Serialize)]
struct ArcOutput {
    start_degrees: f64,
    sweep_degrees: f64,
    canvas_start_radians: f64,
    canvas_sweep_radians: f64,
    visible: bool,
}

impl From<&Arc> for ArcOutput {
    fn from(arc: &Arc) -> Self {
        let (canvas_start_radians, canvas_sweep_radians) = arc.to_canvas_radians();
        Self {
            start_degrees: arc.start_degrees,
            sweep_degrees: arc.sweep_degrees,
            canvas_start_radians,
            canvas_sweep_radians,
            visible: arc.is_visible(),
        }
    }
}

#[derive(Serialize)]
struct DialOutput {
    eating: ArcOutput,
    fasting: ArcOutput,
}

pub fn run(args: DialArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let zones = project(&args.window.resolve(&config));
    let output = DialOutput {
        eating: (&zones.eating).into(),
        fasting: (&zones.fasting).into(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
