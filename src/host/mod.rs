//! Host engine boundary
//!
//! The simulation never owns a window or a clock. It sees the host through
//! [`Host`] and is driven through [`Game`]. A [`Backend`] is a concrete host
//! that the [`engine`] loop can schedule.

pub mod engine;
pub mod headless;

pub use engine::{EngineError, RunSummary, init};
pub use headless::HeadlessBackend;

use thiserror::Error;

use crate::config::{Config, ConfigError};

/// Services the core may call into
pub trait Host {
    /// Window width in pixels
    fn screen_width(&self) -> i32;
    /// Window height in pixels
    fn screen_height(&self) -> i32;
    /// Request a filled circle for the current frame
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32);
}

/// Lifecycle hooks the host invokes, in the order
/// `create`, then `update`/`render` once per frame, then `destroy`.
pub trait Game {
    /// Reject configurations the game cannot run in. Called before the
    /// backend is brought up.
    fn check_config(&self, _config: &Config) -> Result<(), ConfigError> {
        Ok(())
    }
    /// Called once before the first frame
    fn create(&mut self, host: &dyn Host);
    /// Called once at shutdown. May never run if the process is killed.
    fn destroy(&mut self);
    /// Advance by `dt` seconds, strictly before that frame's `render`
    fn update(&mut self, dt: f32);
    /// Draw the current frame
    fn render(&mut self, host: &mut dyn Host);
}

/// Errors raised while bringing a backend up
#[derive(Debug, Error)]
pub enum HostError {
    #[error("backend initialization failed: {0}")]
    Init(String),
    #[error("unable to create {width}x{height} window: {reason}")]
    Window {
        width: i32,
        height: i32,
        reason: String,
    },
}

/// A windowing backend the engine loop can drive
pub trait Backend: Host {
    /// Initialize any libraries
    fn init(&mut self) -> Result<(), HostError>;

    /// Create the main window
    fn create_window(
        &mut self,
        width: i32,
        height: i32,
        fullscreen: bool,
        title: &str,
    ) -> Result<(), HostError>;

    /// Seconds since some fixed origin
    fn timestamp(&self) -> f64;

    /// Pump pending events. Returns false to stop the frame loop.
    fn process_events(&mut self) -> bool;

    /// Release everything acquired by `init` and `create_window`
    fn shutdown(&mut self);

    fn pre_frame_update(&mut self, _dt: f32) {}

    fn post_frame_update(&mut self, _dt: f32) {}

    fn pre_frame_render(&mut self) {}

    fn post_frame_render(&mut self) {}
}
