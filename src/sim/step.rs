//! Per-frame motion and wall deflection
//!
//! Advances the ball deterministically by one frame's elapsed time.

use super::state::{Ball, Sign};

/// Which axes deflected during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub deflected_x: bool,
    pub deflected_y: bool,
}

impl StepOutcome {
    pub fn any(&self) -> bool {
        self.deflected_x || self.deflected_y
    }
}

/// Resolve one axis: returns the committed coordinate and whether it deflected.
///
/// Touching an edge counts as a hit. A deflected axis keeps its previous
/// coordinate for this frame instead of snapping to the wall.
#[inline]
fn resolve_axis(current: f32, next: f32, low: f32, high: f32, sign: &mut Sign) -> (f32, bool) {
    if next <= low || next >= high {
        *sign = sign.flip();
        (current, true)
    } else {
        (next, false)
    }
}

/// Advance the ball by `dt` seconds (`dt` must be non-negative).
pub fn step(ball: &mut Ball, dt: f32) -> StepOutcome {
    let next = ball.pos + ball.dir.as_vec2() * ball.speed * dt;
    let bounds = ball.bounds;

    let (x, deflected_x) =
        resolve_axis(ball.pos.x, next.x, bounds.left, bounds.right, &mut ball.dir.x);
    let (y, deflected_y) =
        resolve_axis(ball.pos.y, next.y, bounds.top, bounds.bottom, &mut ball.dir.y);

    ball.pos.x = x;
    ball.pos.y = y;

    StepOutcome {
        deflected_x,
        deflected_y,
    }
}
