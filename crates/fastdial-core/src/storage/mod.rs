mod config;

pub use config::{Config, DisplayConfig, FastingConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/fastdial[-dev]/` based on FASTDIAL_ENV.
///
/// Set FASTDIAL_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FASTDIAL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("fastdial-dev")
    } else {
        base_dir.join("fastdial")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
