//! This module contains all the constants used in the game.

use std::time::Duration;

/// Fixed host frame time used by the headless driver.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: f32 = 16.0;

/// How far (in pixels) from the exact tile center an entity may be and still count as centered.
pub const TILE_CENTER_EPSILON: f32 = 1.0;

/// Largest delta a single tick accepts. Longer stalls are clamped to this.
pub const MAX_TICK_DELTA: f32 = 0.1;

/// Player speed, in pixels per second.
pub const PLAYER_SPEED: f32 = 80.0;
/// Pursuer speed while scattering or chasing, in pixels per second.
pub const GHOST_SPEED: f32 = 75.0;
/// Pursuer speed while frightened.
pub const GHOST_FRIGHTENED_SPEED: f32 = 40.0;
/// Pursuer speed while returning to the house after being eaten.
pub const GHOST_EATEN_SPEED: f32 = 160.0;
/// Pursuer speed while bobbing inside or leaving the house.
pub const GHOST_HOUSE_SPEED: f32 = 30.0;

/// How far a pursuer bobs above and below its pen position, in pixels.
pub const HOUSE_BOB_AMPLITUDE: f32 = TILE_SIZE / 4.0;

/// Seconds a special pickup keeps the player powered up.
pub const POWER_UP_TIME: f32 = 6.0;

/// Axis-aligned pixel distance under which the player and a pursuer collide.
pub const COLLISION_RANGE_PX: f32 = TILE_SIZE / 2.0;

/// Scatter/chase timeline in seconds. Even indices scatter, odd indices chase; the last entry never ends.
pub const MODE_SCHEDULE: [f32; 8] = [7.0, 20.0, 7.0, 20.0, 5.0, 20.0, 5.0, f32::INFINITY];

/// Seconds each pursuer waits in the house before leaving, indexed by role.
pub const RELEASE_DELAYS: [f32; 4] = [0.0, 2.0, 5.0, 10.0];

/// How many tiles ahead of the player the ambusher aims.
pub const AMBUSH_TILES_AHEAD: i32 = 4;
/// How many tiles ahead of the player the flanker pivots around.
pub const FLANK_TILES_AHEAD: i32 = 2;
/// Tile radius around the player inside which the wanderer chases.
pub const WANDER_RADIUS_TILES: f32 = 8.0;

/// Tile every entity falls back to when asked to spawn somewhere unwalkable.
pub const FALLBACK_SPAWN_TILE: (i32, i32) = (1, 1);

/// The raw layout of the game board, as a 2D array of characters.
///
/// `#` wall, `.` pellet, `o` power pellet, ` ` or `T` floor, `=` house door (one-way),
/// `0` player start, `1`..`4` pursuer starts.
pub const RAW_BOARD: [&str; 31] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##    1     ##.#     ",
    "     #.## ###==### ##.#     ",
    "######.## #      # ##.######",
    "T     .   #3 2 4 #   .     T",
    "######.## #      # ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......0 .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_speed_ordering() {
        assert!(GHOST_FRIGHTENED_SPEED < GHOST_SPEED);
        assert!(GHOST_EATEN_SPEED > GHOST_SPEED);
        assert!(GHOST_HOUSE_SPEED < GHOST_SPEED);
    }

    #[test]
    fn test_single_step_never_skips_a_tile() {
        // Movement is sub-stepped per tile center, but a clamped step should still stay under one tile for the player.
        assert!(PLAYER_SPEED * MAX_TICK_DELTA <= TILE_SIZE);
    }

    #[test]
    fn test_mode_schedule_ends_in_permanent_chase() {
        assert_eq!(MODE_SCHEDULE.len() % 2, 0);
        assert!(MODE_SCHEDULE[MODE_SCHEDULE.len() - 1].is_infinite());
        assert!(MODE_SCHEDULE[..MODE_SCHEDULE.len() - 1].iter().all(|d| d.is_finite() && *d > 0.0));
    }

    #[test]
    fn test_raw_board_dimensions() {
        for row in RAW_BOARD.iter() {
            assert_eq!(row.len(), 28);
        }
    }

    #[test]
    fn test_raw_board_boundaries() {
        assert!(RAW_BOARD[0].chars().all(|c| c == '#'));
        assert!(RAW_BOARD[RAW_BOARD.len() - 1].chars().all(|c| c == '#'));
    }

    #[test]
    fn test_raw_board_power_pellets() {
        let power_pellet_count: usize = RAW_BOARD.iter().map(|row| row.chars().filter(|&c| c == 'o').count()).sum();
        assert_eq!(power_pellet_count, 4);
    }

    #[test]
    fn test_raw_board_has_every_spawn_marker_once() {
        for marker in ['0', '1', '2', '3', '4'] {
            let count: usize = RAW_BOARD.iter().map(|row| row.chars().filter(|&c| c == marker).count()).sum();
            assert_eq!(count, 1, "marker {marker}");
        }
    }

    #[test]
    fn test_raw_board_tunnel_row() {
        let tunnel_row = RAW_BOARD[14];
        assert_eq!(tunnel_row.chars().next().unwrap(), 'T');
        assert_eq!(tunnel_row.chars().last().unwrap(), 'T');
    }
}
