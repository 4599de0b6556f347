//! Brickfall entry point
//!
//! Headless frame driver: validates the configuration, then plays a scripted
//! session with a ball-tracking paddle. The real game hands the same tick
//! function and scene snapshots to an interactive renderer.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use brickfall::config::GameConfig;
use brickfall::scene::scene;
use brickfall::sim::{GamePhase, GameState, TickInput, tick};

/// Upper bound on the demo session, at one tick per 60 Hz frame
const MAX_TICKS: u64 = 60 * 120;

fn main() -> ExitCode {
    env_logger::init();

    let config = GameConfig::default();
    if let Err(err) = config.validate() {
        log::error!("invalid configuration: {err}");
        return ExitCode::FAILURE;
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, &config);
    log::info!("brickfall starting (seed {seed})");

    let mut input = TickInput {
        start: true,
        ..TickInput::default()
    };

    for _ in 0..MAX_TICKS {
        // Track the ball with the paddle, like a patient player would
        input.move_left = state.ball.pos.x < state.paddle.rect.center().x;
        input.move_right = state.ball.pos.x > state.paddle.rect.center().x;
        tick(&mut state, &mut input, &config);

        if state.phase() == GamePhase::Over {
            break;
        }
    }

    let shapes = scene(&state);
    let outcome = if state.cleared(&config) {
        "board cleared"
    } else if state.phase() == GamePhase::Over {
        "ball lost"
    } else {
        "tick budget exhausted"
    };
    log::info!(
        "{outcome} after {} ticks; score {}; {} shapes in final scene",
        state.time_ticks,
        state.score,
        shapes.len()
    );
    println!("score: {}/{}", state.score, config.brick_rows * config.brick_cols);

    ExitCode::SUCCESS
}
