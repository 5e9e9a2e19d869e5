//! Frame loop
//!
//! Owns scheduling: brings the backend up, calls the game's hooks in order,
//! and tears everything down when the backend asks to stop.

use thiserror::Error;

use super::{Backend, Game, HostError};
use crate::config::{Config, ConfigError};
use crate::consts::MAX_FRAME_GAP;

/// Errors that prevent the loop from starting
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Host(#[from] HostError),
}

/// What happened during a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames updated and rendered
    pub frames: u64,
    /// Sum of the `dt` values passed to `update`
    pub simulated: f32,
}

/// Elapsed time to feed `update` for a given clock gap.
///
/// Gaps of a second or more (debugger pauses, suspended laptops) advance
/// nothing rather than teleporting the ball. A clock that steps backwards
/// advances nothing either.
pub fn frame_delta(gap: f64) -> f32 {
    if (0.0..MAX_FRAME_GAP).contains(&gap) {
        gap as f32
    } else {
        0.0
    }
}

/// Register `game` with `backend` and run until the backend stops.
///
/// Validates `config`, creates the window, then drives
/// `create`, `update`/`render` per frame, and `destroy`.
pub fn init<B, G>(
    config: &Config,
    backend: &mut B,
    game: &mut G,
) -> Result<RunSummary, EngineError>
where
    B: Backend,
    G: Game,
{
    config.validate()?;
    game.check_config(config)?;
    if config.debug {
        config.log();
    }

    backend.init()?;
    backend.create_window(
        config.screen_width,
        config.screen_height,
        config.use_fullscreen,
        &config.window_title,
    )?;
    log::info!(
        "Window created: {}x{} \"{}\"",
        config.screen_width,
        config.screen_height,
        config.window_title
    );

    log::debug!("create()");
    game.create(&*backend);

    let summary = run_frames(backend, game);

    log::debug!("destroy()");
    game.destroy();
    backend.shutdown();
    log::info!(
        "Stopped after {} frames ({:.2}s simulated)",
        summary.frames,
        summary.simulated
    );

    Ok(summary)
}

fn run_frames<B: Backend, G: Game>(backend: &mut B, game: &mut G) -> RunSummary {
    let mut summary = RunSummary {
        frames: 0,
        simulated: 0.0,
    };
    let mut last_time = backend.timestamp();

    loop {
        let now = backend.timestamp();
        let gap = now - last_time;
        let dt = frame_delta(gap);
        if !(0.0..MAX_FRAME_GAP).contains(&gap) {
            log::warn!("Frame gap of {gap:.2}s, skipping motion this frame");
        }
        last_time = now;

        backend.pre_frame_update(dt);
        game.update(dt);
        backend.post_frame_update(dt);

        backend.pre_frame_render();
        game.render(backend);
        backend.post_frame_render();

        summary.frames += 1;
        summary.simulated += dt;

        if !backend.process_events() {
            break;
        }
    }

    summary
}
