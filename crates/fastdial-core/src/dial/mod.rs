//! 24-hour dial geometry.
//!
//! Angles are in degrees, clockwise from 12 o'clock, with a full day mapped
//! onto one turn. Renderers convert to their own unit with the helpers in
//! [`clock`].

pub mod clock;
mod projector;

pub use projector::{project, Arc, ZoneProjection};
