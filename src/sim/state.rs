//! Ball state and per-axis direction
//!
//! The ball's heading is stored as an independent sign per axis rather than a
//! velocity vector; magnitude lives solely in `speed`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{BALL_RADIUS, BALL_SPEED};

/// Direction of travel along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    /// Only seen before the ball is placed in the arena
    #[default]
    Zero,
    Positive,
}

impl Sign {
    /// Reverse direction (zero stays zero)
    pub fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            Sign::Negative => -1.0,
            Sign::Zero => 0.0,
            Sign::Positive => 1.0,
        }
    }
}

/// Per-axis heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Direction {
    pub x: Sign,
    pub y: Sign,
}

impl Direction {
    /// Up and to the right (screen y grows downward)
    pub const UP_RIGHT: Direction = Direction {
        x: Sign::Positive,
        y: Sign::Negative,
    };

    pub const fn new(x: Sign, y: Sign) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x.as_f32(), self.y.as_f32())
    }
}

/// The bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Direction,
    /// Distance per second along each moving axis
    pub speed: f32,
    pub radius: f32,
    /// Region the ball's centre may occupy, computed once when placed
    pub bounds: Rect,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: Direction::default(),
            speed: BALL_SPEED,
            radius: BALL_RADIUS,
            bounds: Rect::default(),
        }
    }
}

impl Ball {
    /// Place the ball at the centre of a `width` x `height` screen.
    ///
    /// Bounds are the screen inset by the radius on every side so the whole
    /// circle stays visible.
    pub fn place(&mut self, width: i32, height: i32) {
        let (w, h) = (width as f32, height as f32);
        self.bounds = Rect::new(self.radius, self.radius, w - self.radius, h - self.radius);
        self.pos = Vec2::new(w / 2.0, h / 2.0);
        self.dir = Direction::UP_RIGHT;
    }
}
