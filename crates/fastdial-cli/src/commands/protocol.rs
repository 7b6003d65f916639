use clap::Subcommand;
use fastdial_core::{Config, FastingProtocol, TimeOfDay};

#[derive(Subcommand)]
pub enum ProtocolAction {
    /// List the preset protocols
    List,
    /// Replace the eating window with a preset starting at the given time
    Apply {
        /// Protocol label (16:8, 18:6, 20:4, OMAD)
        protocol: FastingProtocol,
        /// Eating window start (HH:MM)
        #[arg(long)]
        start: TimeOfDay,
    },
}

pub fn run(action: ProtocolAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProtocolAction::List => {
            for protocol in FastingProtocol::PRESETS {
                println!(
                    "{:<6} fast {:>2}h  eat {:>2}h",
                    protocol.label(),
                    protocol.fasting_hours().unwrap_or_default(),
                    protocol.eating_hours().unwrap_or_default(),
                );
            }
        }
        ProtocolAction::Apply { protocol, start } => {
            let mut config = Config::load()?;
            config.apply_protocol(protocol, start)?;
            config.save()?;
            let window = config.window();
            tracing::info!(
                %protocol,
                start = %window.start(),
                end = %window.end(),
                "protocol applied"
            );
            println!("{protocol}: eating {} - {}", window.start(), window.end());
        }
    }
    Ok(())
}
