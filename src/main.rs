use anyhow::Context;
use maze_chase::config::GameConfig;
use maze_chase::constants::{LOOP_TIME, RAW_BOARD};
use maze_chase::game::Game;
use maze_chase::input::{HeldKeys, KeyCode};
use maze_chase::render::{AsciiRenderer, Renderer};
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ticks simulated before the scripted player presses the quit key.
const MAX_TICKS: u32 = 60 * 180;

/// Ticks each scripted key is held.
const KEY_HOLD_TICKS: u32 = 45;

/// Keys the scripted player cycles through.
const KEY_SCRIPT: [KeyCode; 4] = [KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down];

fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default())
        .init();
}

/// Runs a headless game on the built-in board with a scripted keyboard, then prints the final
/// frame. Set `MAZE_CHASE_SEED` to reproduce a run.
pub fn main() -> anyhow::Result<()> {
    setup_logging();

    let mut config = GameConfig::default();
    if let Ok(seed) = std::env::var("MAZE_CHASE_SEED") {
        let seed = seed.parse().context("MAZE_CHASE_SEED must be an unsigned integer")?;
        config = config.with_seed(seed);
    }

    let mut game = Game::from_board(&RAW_BOARD, config).context("Failed to build game")?;
    let mut keys = HeldKeys::default();
    let delta = LOOP_TIME.as_secs_f32();

    info!(
        "Starting headless game loop ({:.3}ms per tick, {} pickups)",
        delta * 1000.0,
        game.food().remaining()
    );

    let mut tick_no = 0u32;
    while game.is_running() {
        if tick_no == MAX_TICKS {
            keys.key_down(KeyCode::Escape);
        }
        if keys.quit_requested() {
            info!(ticks = tick_no, "Quit key pressed, stopping");
            game.stop();
            break;
        }

        if tick_no % KEY_HOLD_TICKS == 0 {
            let step = (tick_no / KEY_HOLD_TICKS) as usize;
            if let Some(held) = keys.active() {
                keys.key_up(held);
            }
            keys.key_down(KEY_SCRIPT[step % KEY_SCRIPT.len()]);
        }

        game.tick(delta, &keys);
        for event in game.drain_events() {
            debug!(tick = tick_no, event = ?event, "Event");
        }
        tick_no += 1;
    }

    let mut renderer = AsciiRenderer::default();
    renderer.render(&game.frame());
    println!("{}", renderer.output());

    info!(
        outcome = ?game.outcome(),
        elapsed = game.elapsed(),
        food_left = game.food().remaining(),
        "Finished"
    );
    Ok(())
}
