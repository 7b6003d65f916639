//! TOML-based application configuration.
//!
//! Stores:
//! - The fasting protocol label and the eating window
//! - Display preferences for the countdown poller
//!
//! Configuration is stored at `~/.config/fastdial/config.toml`.
//! Every edit replaces the whole window; the engine never sees a partially
//! updated one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::protocol::FastingProtocol;
use crate::window::{TimeOfDay, TimeWindow};

/// Fasting configuration.
///
/// The window is read as a unit. A boundary missing from the file is derived
/// from the protocol's eating length; it never falls back to an unrelated
/// default on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FastingConfigFile")]
pub struct FastingConfig {
    pub protocol: FastingProtocol,
    pub eating_start: TimeOfDay,
    pub eating_end: TimeOfDay,
}

/// `[fasting]` as written on disk, before the window is completed.
#[derive(Deserialize)]
struct FastingConfigFile {
    #[serde(default)]
    protocol: FastingProtocol,
    #[serde(default)]
    eating_start: Option<TimeOfDay>,
    #[serde(default)]
    eating_end: Option<TimeOfDay>,
}

impl TryFrom<FastingConfigFile> for FastingConfig {
    type Error = ConfigError;

    fn try_from(file: FastingConfigFile) -> Result<Self, ConfigError> {
        let protocol = file.protocol;
        let needs_preset = |key: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("required when protocol is '{protocol}'"),
        };

        let window = match (file.eating_start, file.eating_end) {
            (Some(start), Some(end)) => TimeWindow::new(start, end),
            (Some(start), None) => protocol
                .window_from(start)
                .ok_or_else(|| needs_preset("fasting.eating_end"))?,
            (None, Some(end)) => protocol
                .window_ending_at(end)
                .ok_or_else(|| needs_preset("fasting.eating_start"))?,
            (None, None) => protocol
                .window_from(default_eating_start())
                .unwrap_or_else(|| Self::default().window()),
        };
        Ok(Self::from_window(protocol, window).reconciled())
    }
}

impl FastingConfig {
    fn from_window(protocol: FastingProtocol, window: TimeWindow) -> Self {
        Self {
            protocol,
            eating_start: window.start(),
            eating_end: window.end(),
        }
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.eating_start, self.eating_end)
    }

    /// Relabel as `Custom` when the window no longer has the preset's length.
    fn reconciled(mut self) -> Self {
        if let Some(hours) = self.protocol.eating_hours() {
            if u32::from(self.window().eating_minutes()) != hours * 60 {
                self.protocol = FastingProtocol::Custom;
            }
        }
        self
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Seconds between countdown refreshes.
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
    #[serde(default = "default_true")]
    pub show_seconds: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/fastdial/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fasting: FastingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// Default functions
fn default_eating_start() -> TimeOfDay {
    TimeOfDay::from_hm(12, 0).unwrap_or_default()
}
fn default_eating_end() -> TimeOfDay {
    TimeOfDay::from_hm(20, 0).unwrap_or_default()
}
fn default_tick_interval_secs() -> u64 {
    1
}
fn default_true() -> bool {
    true
}

impl Default for FastingConfig {
    fn default() -> Self {
        Self {
            protocol: FastingProtocol::default(),
            eating_start: default_eating_start(),
            eating_end: default_eating_end(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            show_seconds: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fasting: FastingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => serde_json::Value::Number(
                value
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                    .into(),
            ),
            serde_json::Value::Object(_) => {
                return Err(invalid("cannot replace a whole section".into()))
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Location of `config.toml` in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location or create it with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LoadFailed`] for unreadable or invalid files.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SaveFailed`] if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is rejected.
    /// On error the configuration is left unchanged.
    ///
    /// Setting `fasting.protocol` to a preset moves `eating_end` so the
    /// window has the preset's length. Editing a window boundary directly
    /// relabels the protocol as `custom` if the length no longer matches.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key == "fasting.protocol" {
            let protocol: FastingProtocol =
                value.parse().map_err(|e: crate::error::ValidationError| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: e.to_string(),
                    }
                })?;
            return match protocol {
                FastingProtocol::Custom => {
                    self.fasting.protocol = protocol;
                    Ok(())
                }
                preset => self.apply_protocol(preset, self.fasting.eating_start),
            };
        }

        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Replace the window with a preset of `protocol` starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for `custom`, which has no length.
    pub fn apply_protocol(&mut self, protocol: FastingProtocol, start: TimeOfDay) -> Result<()> {
        let window = protocol
            .window_from(start)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "fasting.protocol".into(),
                message: format!("'{protocol}' has no preset eating length"),
            })?;
        self.fasting = FastingConfig::from_window(protocol, window);
        Ok(())
    }

    /// The configured eating window.
    pub fn window(&self) -> TimeWindow {
        self.fasting.window()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.tick_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "display.tick_interval_secs".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
