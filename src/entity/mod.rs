//! Entities and the movement engine they share.
//!
//! Every moving thing owns a [`Mover`]: a continuous pixel position, the tile derived from it, a
//! heading and a speed. Direction changes are only ever committed at tile centers, so an entity
//! always occupies a well-defined tile for collision and AI purposes.

pub mod ghost;
pub mod pacman;
pub mod targeting;

use glam::{IVec2, Vec2};
use tracing::{trace, warn};

use crate::constants::{FALLBACK_SPAWN_TILE, TILE_CENTER_EPSILON, TILE_SIZE};
use crate::map::{direction::Direction, Maze};

/// Distance under which a position is treated as already sitting on a tile center.
const CENTER_SLACK: f32 = 1e-3;

/// Shared pixel/tile position model for the player and the pursuers.
///
/// `tile` is always `floor(pixel / TILE_SIZE)`; it is recomputed from the pixel position after
/// every change and never written independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    pixel: Vec2,
    tile: IVec2,
    /// Tile occupied when the current tick began.
    prev_tile: IVec2,
    /// Current heading.
    pub direction: Direction,
    /// Pixels per second.
    pub speed: f32,
}

impl Mover {
    /// Creates a mover centered on `tile`.
    ///
    /// A start tile that is not walkable floor is a caller error; the mover is placed on
    /// [`FALLBACK_SPAWN_TILE`] instead so the game can still run.
    pub fn spawn(maze: &Maze, tile: IVec2, direction: Direction, speed: f32) -> Self {
        let tile = if maze.is_floor(tile) {
            tile
        } else {
            let fallback = IVec2::from(FALLBACK_SPAWN_TILE);
            warn!(requested = ?tile, fallback = ?fallback, "Spawn tile is not walkable, using fallback");
            fallback
        };

        Self {
            pixel: Maze::tile_center(tile),
            tile,
            prev_tile: tile,
            direction,
            speed,
        }
    }

    pub fn pixel(&self) -> Vec2 {
        self.pixel
    }

    pub fn tile(&self) -> IVec2 {
        self.tile
    }

    /// The tile occupied when the current tick began.
    pub fn prev_tile(&self) -> IVec2 {
        self.prev_tile
    }

    /// Marks the start of a tick; remembers the current tile for pass-through collision checks.
    pub fn begin_tick(&mut self) {
        self.prev_tile = self.tile;
    }

    /// Moves to an arbitrary pixel position, wrapping it onto the maze.
    pub fn set_pixel(&mut self, pixel: Vec2, maze: &Maze) {
        let size = maze.pixel_size();
        self.pixel = Vec2::new(wrap_axis(pixel.x, size.x), wrap_axis(pixel.y, size.y));
        self.tile = Maze::pixel_to_tile(self.pixel);
    }

    /// Returns true while within [`TILE_CENTER_EPSILON`] of the current tile's center on both axes.
    pub fn is_on_tile_center(&self) -> bool {
        let offset = (self.pixel - Maze::tile_center(self.tile)).abs();
        offset.max_element() <= TILE_CENTER_EPSILON
    }

    /// Moves exactly onto the current tile's center.
    pub fn snap_to_center(&mut self) {
        self.pixel = Maze::tile_center(self.tile);
    }

    /// Snaps the coordinate across the current heading onto the tile's center line.
    pub fn snap_cross_axis(&mut self) {
        let center = Maze::tile_center(self.tile);
        if self.direction.is_horizontal() {
            self.pixel.y = center.y;
        } else {
            self.pixel.x = center.x;
        }
    }

    /// Returns true if the tile one step from `tile` in `direction` may be entered.
    pub fn can_move_to_dir(&self, maze: &Maze, direction: Direction) -> bool {
        maze.can_move_to_dir(self.tile, direction)
    }

    /// Signed distance from the current position to the current tile's center, along the heading.
    ///
    /// Positive when the center still lies ahead.
    fn center_offset_ahead(&self) -> f32 {
        (Maze::tile_center(self.tile) - self.pixel).dot(self.direction.as_vec2())
    }

    /// Moves `distance` pixels along the heading with no legality checks, then wraps.
    ///
    /// This is the only place coordinates wrap across the maze edges.
    pub fn translate(&mut self, distance: f32, maze: &Maze) {
        let before = self.tile;
        self.set_pixel(self.pixel + self.direction.as_vec2() * distance, maze);
        if (self.tile - before).abs().max_element() > 1 {
            trace!(from = ?before, to = ?self.tile, "Wrapped across maze edge");
        }
    }

    /// Moves along the heading for `delta` seconds at the mover's own speed, without legality checks.
    pub fn move_by(&mut self, delta: f32, maze: &Maze) {
        self.translate(self.speed * delta, maze);
    }

    /// Moves up to `budget` pixels along the heading, stopping early on the next tile center.
    ///
    /// Returns the distance actually covered. Zero means the way ahead is blocked: the mover sits
    /// on a tile center and the next tile in its heading cannot be entered. Callers loop, making
    /// their decisions each time a center is reached, until the budget is spent.
    pub fn advance(&mut self, budget: f32, maze: &Maze) -> f32 {
        if budget <= 0.0 {
            return 0.0;
        }

        let ahead = self.center_offset_ahead();
        let (distance, landing) = if ahead > CENTER_SLACK {
            (ahead, self.tile)
        } else {
            if !self.can_move_to_dir(maze, self.direction) {
                if ahead < -CENTER_SLACK {
                    trace!(tile = ?self.tile, direction = ?self.direction, "Blocked past tile center, snapping back");
                }
                self.snap_to_center();
                return 0.0;
            }
            (ahead + TILE_SIZE, self.tile + self.direction.as_ivec2())
        };

        if budget >= distance {
            let landing = maze.wrap_tile(landing);
            self.pixel = Maze::tile_center(landing);
            self.tile = landing;
            distance
        } else {
            self.translate(budget, maze);
            budget
        }
    }

    /// Axis-aligned proximity test: true when both pixel deltas are within `range`.
    pub fn collides_with(&self, other: &Mover, range: f32) -> bool {
        let delta = (self.pixel - other.pixel).abs();
        delta.x <= range && delta.y <= range
    }

    /// True when the two movers swapped tiles during the current tick.
    pub fn crossed_paths(&self, other: &Mover) -> bool {
        self.tile != self.prev_tile && self.tile == other.prev_tile && other.tile == self.prev_tile
    }
}

/// Wraps a coordinate into `[0, max)`.
fn wrap_axis(value: f32, max: f32) -> f32 {
    let wrapped = value.rem_euclid(max);
    // rem_euclid can round up to exactly `max` for tiny negative inputs
    if wrapped >= max {
        0.0
    } else {
        wrapped
    }
}
