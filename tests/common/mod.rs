#![allow(dead_code)]

use glam::IVec2;
use maze_chase::config::GameConfig;
use maze_chase::events::GameEvent;
use maze_chase::game::Game;
use maze_chase::input::InputSource;
use maze_chase::map::{Maze, TileType};

/// One simulated frame at 60 Hz.
pub const FRAME: f32 = 1.0 / 60.0;

/// Release delays long enough that penned pursuers never leave during a test.
pub const PENNED: [f32; 4] = [1000.0; 4];

/// Builds a bare maze: `#` wall, `=` one-way, anything else floor.
pub fn maze_from(rows: &[&str]) -> Maze {
    let grid = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '#' => TileType::Wall,
                    '=' => TileType::Oneway,
                    _ => TileType::Floor,
                })
                .collect()
        })
        .collect();
    Maze::new(grid).unwrap()
}

/// Seeded config where every pursuer that starts in the pen stays there.
pub fn penned_config() -> GameConfig {
    GameConfig::default().with_seed(7).with_release_delays(PENNED)
}

/// Player at (7, 1) facing left, Blinky active on the house exit at (8, 1).
pub const DUEL_BOARD: [&str; 5] = [
    "################",
    "#      01    . #",
    "########=#######",
    "#2 3 4         #",
    "################",
];

/// Player at (1, 1) with a power pellet to its right; every pursuer penned.
pub const PELLET_BOARD: [&str; 5] = [
    "################",
    "#0o.....       #",
    "########=#######",
    "#1 2 3 4      .#",
    "################",
];

/// Blinky active at (7, 1), a power pellet at (8, 1), player at (9, 1) facing left.
pub const HUNT_BOARD: [&str; 5] = [
    "################",
    "#      1o0     #",
    "#######=########",
    "#2 3 4        .#",
    "################",
];

/// A single pellet one step right of the player.
pub const LAST_PELLET_BOARD: [&str; 5] = [
    "##########",
    "#0.      #",
    "####=#####",
    "#1234    #",
    "##########",
];

pub fn tile(x: i32, y: i32) -> IVec2 {
    IVec2::new(x, y)
}

/// Ticks until `stop` matches an event or `max_ticks` run out, collecting every event seen.
pub fn run_until(
    game: &mut Game,
    input: &dyn InputSource,
    max_ticks: usize,
    mut stop: impl FnMut(&GameEvent) -> bool,
) -> (Vec<GameEvent>, bool) {
    let mut seen = Vec::new();
    for _ in 0..max_ticks {
        game.tick(FRAME, input);
        let events = game.drain_events();
        let hit = events.iter().any(&mut stop);
        seen.extend(events);
        if hit {
            return (seen, true);
        }
        if !game.is_running() {
            break;
        }
    }
    (seen, false)
}
