//! Bouncing Ball - one ball reflecting off the walls of a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, ball state, per-frame step)
//! - `game`: Lifecycle hooks the host drives
//! - `render`: State to draw-request conversion
//! - `host`: Host traits, the frame loop, and a headless backend
//! - `config`: Typed engine configuration

pub mod config;
pub mod game;
pub mod host;
pub mod render;
pub mod sim;

pub use config::{Config, ConfigError};
pub use game::BouncingBall;

/// Game configuration constants
pub mod consts {
    /// Ball defaults
    pub const BALL_SPEED: f32 = 256.0;
    pub const BALL_RADIUS: f32 = 16.0;

    /// Clock gaps at or above this (seconds) skip motion for the frame
    pub const MAX_FRAME_GAP: f64 = 1.0;
}
