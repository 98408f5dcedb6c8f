//! Headless demo driver
//!
//! Runs a seeded match with two scripted paddles chasing the ball, at the
//! simulation's nominal tick rate but without a real clock. Useful for
//! smoke-testing the core and for eyeballing determinism:
//!
//! ```text
//! starpong [seed] [ticks] [--dump]
//! ```
//!
//! `--dump` prints the final render snapshot as JSON.

use starpong::{Config, GameState, InputState, Playfield, audio, consts, sim};

/// Audio sink that just logs; a windowed frontend would play samples here
struct LogAudio;

impl audio::AudioSink for LogAudio {
    fn paddle_hit(&mut self) -> Result<(), audio::AudioError> {
        log::debug!("bip");
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let ticks: u64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);
    let dump = args.iter().any(|a| a == "--dump");

    let field = Playfield::new(consts::FIELD_WIDTH, consts::FIELD_HEIGHT);
    let mut state = GameState::new(seed, Config::default(), &field);
    let mut sink = LogAudio;

    // Press the toggle once to leave the start screen
    let mut input = InputState::new();
    input.toggle_menu = true;
    sim::tick(&mut state, &input, &field, consts::TICK_DT);
    input.toggle_menu = false;

    for _ in 0..ticks {
        // Both paddles chase the ball, with a small dead zone so they do
        // not jitter on every tick
        let ball_y = state.ball.center().y;
        input.left_up = ball_y > state.left.center_y() + 5.0;
        input.left_down = ball_y < state.left.center_y() - 5.0;
        input.right_up = ball_y > state.right.center_y() + 5.0;
        input.right_down = ball_y < state.right.center_y() - 5.0;

        let events = sim::tick(&mut state, &input, &field, consts::TICK_DT);
        audio::dispatch(&events, &mut sink);

        if let Some(winner) = events.game_over {
            log::info!("{winner:?} wins after {} ticks", state.time_ticks);
            break;
        }
    }

    log::info!(
        "final score {} - {} ({:?})",
        state.left.score,
        state.right.score,
        state.phase
    );

    if dump {
        match serde_json::to_string_pretty(&state.snapshot(&field)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("snapshot dump failed: {e}"),
        }
    }
}
