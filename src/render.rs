//! Converts simulation state into draw requests for the host

use crate::host::Host;
use crate::sim::Ball;

/// A filled circle in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleCommand {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

/// Pixel circle for the ball. Coordinates truncate toward zero.
pub fn circle_for(ball: &Ball) -> CircleCommand {
    CircleCommand {
        x: ball.pos.x as i32,
        y: ball.pos.y as i32,
        radius: ball.radius as i32,
    }
}

/// Issue the frame's single draw request
pub fn draw_ball(ball: &Ball, host: &mut dyn Host) {
    let c = circle_for(ball);
    host.draw_circle(c.x, c.y, c.radius);
}
