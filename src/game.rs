//! The bouncing ball game: lifecycle hooks over the simulation

use crate::config::{Config, ConfigError};
use crate::host::{Game, Host};
use crate::render;
use crate::sim::{self, Ball};

/// Owns the ball and exposes it to the host through [`Game`]
#[derive(Debug, Clone, Default)]
pub struct BouncingBall {
    ball: Ball,
    bounces: u64,
}

impl BouncingBall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration this game registers with
    pub fn configuration() -> Config {
        Config {
            debug: false,
            screen_width: 1920 / 2,
            screen_height: 1080 / 2,
            use_fullscreen: false,
            window_title: "Bouncing Ball Demo".to_string(),
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Frames in which at least one wall was hit
    pub fn bounces(&self) -> u64 {
        self.bounces
    }
}

impl Game for BouncingBall {
    fn check_config(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate_arena(self.ball.radius)
    }

    fn create(&mut self, host: &dyn Host) {
        let (width, height) = (host.screen_width(), host.screen_height());
        self.ball.place(width, height);
        log::debug!(
            "Ball placed at ({}, {}) within {:?}",
            self.ball.pos.x,
            self.ball.pos.y,
            self.ball.bounds
        );
    }

    fn destroy(&mut self) {}

    fn update(&mut self, dt: f32) {
        let outcome = sim::step(&mut self.ball, dt);
        if outcome.any() {
            self.bounces += 1;
            log::debug!(
                "Bounce at ({:.1}, {:.1}) x={} y={}",
                self.ball.pos.x,
                self.ball.pos.y,
                outcome.deflected_x,
                outcome.deflected_y
            );
        }
    }

    fn render(&mut self, host: &mut dyn Host) {
        render::draw_ball(&self.ball, host);
    }
}
