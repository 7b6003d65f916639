//! # Fastdial Core Library
//!
//! This library provides the intermittent-fasting window engine behind
//! Fastdial. Everything here is a pure function of an eating window and an
//! instant; a CLI or GUI polls it and renders the results.
//!
//! ## Architecture
//!
//! - **Window**: `TimeOfDay` and the half-open `TimeWindow`, including
//!   windows that cross midnight
//! - **Phase Engine**: eating/fasting classification and countdown to the
//!   next transition
//! - **Dial**: angle math and projection of the window onto a 24-hour dial
//! - **Storage**: TOML-based configuration of the window and display
//!
//! ## Key Components
//!
//! - [`TimeWindow`]: the configured eating window
//! - [`evaluate`] / [`evaluate_at`]: current phase and time remaining
//! - [`project`]: eating and fasting arcs for a radial renderer
//! - [`Config`]: application configuration management
//!
//! Phase and projection share one offset formula, so a status label and a
//! dial drawn from the same window always agree.

pub mod dial;
pub mod error;
pub mod events;
pub mod phase;
pub mod protocol;
pub mod storage;
pub mod window;

pub use dial::{project, Arc, ZoneProjection};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::{snapshot, Event};
pub use phase::{evaluate, evaluate_at, Phase, PhaseResult};
pub use protocol::FastingProtocol;
pub use storage::Config;
pub use window::{TimeOfDay, TimeWindow, MINUTES_PER_DAY};
