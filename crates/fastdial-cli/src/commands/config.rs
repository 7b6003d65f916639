use clap::Subcommand;
use fastdial_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "fasting.eating_start", "display.show_seconds")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults (16:8, eating 12:00 - 20:00)
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            tracing::debug!(%key, %value, "config updated");
            let window = config.window();
            println!(
                "ok\n{}: eating {} - {}",
                config.fasting.protocol,
                window.start(),
                window.end()
            );
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let path = Config::path()?;
            let config = Config::default();
            config.save_to(&path)?;
            let window = config.window();
            tracing::debug!(path = %path.display(), "config reset");
            println!(
                "config reset to defaults at {}\n{}: eating {} - {}",
                path.display(),
                config.fasting.protocol,
                window.start(),
                window.end()
            );
        }
    }
    Ok(())
}
