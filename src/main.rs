//! Bouncing Ball entry point
//!
//! Runs the game on the headless backend for a fixed number of frames.
//!
//! Usage: `bouncing-ball [CONFIG.json] [FRAMES]`
//!
//! A lone numeric argument is taken as FRAMES.

use std::process::ExitCode;

use bouncing_ball::host::{self, EngineError, HeadlessBackend};
use bouncing_ball::{BouncingBall, Config, ConfigError};
use thiserror::Error;

/// Ten seconds at 60 Hz
const DEFAULT_FRAMES: u64 = 600;

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid frame count {0:?} (usage: bouncing-ball [CONFIG.json] [FRAMES])")]
    Frames(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

struct Args {
    config_path: Option<String>,
    frames: u64,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let args: Vec<String> = args.collect();
    let (config_path, frames) = match args.as_slice() {
        [] => (None, None),
        [only] => match only.parse::<u64>() {
            Ok(frames) => (None, Some(frames)),
            Err(_) => (Some(only.clone()), None),
        },
        [path, frames, ..] => {
            let frames = frames
                .parse()
                .map_err(|_| CliError::Frames(frames.clone()))?;
            (Some(path.clone()), Some(frames))
        }
    };
    Ok(Args {
        config_path,
        frames: frames.unwrap_or(DEFAULT_FRAMES),
    })
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    match &args.config_path {
        Some(path) => Config::load(path, BouncingBall::configuration()),
        None => Ok(BouncingBall::configuration()),
    }
}

fn init_logger(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args, config: &Config) -> Result<(), CliError> {
    let mut backend = HeadlessBackend::new(args.frames);
    let mut game = BouncingBall::new();

    let summary = host::init(config, &mut backend, &mut game)?;

    let ball = game.ball();
    log::info!(
        "Final ball position ({:.1}, {:.1}), {} bounce frames, {} draws over {} frames",
        ball.pos.x,
        ball.pos.y,
        game.bounces(),
        backend.draw_calls(),
        summary.frames
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            init_logger(false);
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = load_config(&args);
    init_logger(config.as_ref().is_ok_and(|c| c.debug));
    log::info!("Bouncing Ball starting...");
    if let (Some(path), Ok(_)) = (&args.config_path, &config) {
        log::info!("Loaded config from {path}");
    }

    match config.map_err(CliError::from).and_then(|c| run(&args, &c)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Runtime Error: {e}");
            ExitCode::FAILURE
        }
    }
}
