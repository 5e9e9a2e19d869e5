//! Deterministic simulation module
//!
//! Everything that moves the ball lives here. This module must stay pure:
//! - No host, rendering, or platform dependencies
//! - No randomness
//! - State changes only through `step`

pub mod geometry;
pub mod state;
pub mod step;

pub use geometry::Rect;
pub use state::{Ball, Direction, Sign};
pub use step::{StepOutcome, step};
