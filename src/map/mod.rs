//! This module defines the static maze and provides functions for interacting with it.
//!
//! Coordinates come in two flavours: tile coordinates (`IVec2`, one per grid cell, `y` grows
//! downward) and pixel coordinates (`Vec2`, continuous, `(0, 0)` is the top-left corner of tile
//! `(0, 0)`). A tile `t` covers the pixels `[t * TILE_SIZE, (t + 1) * TILE_SIZE)`.

pub mod direction;
pub mod food;
pub mod parser;

use std::collections::HashSet;

use glam::{IVec2, Vec2};
use pathfinding::prelude::bfs_reach;

use crate::constants::TILE_SIZE;
use crate::error::MapError;
use crate::map::direction::Direction;

/// An enum representing the different kinds of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// A walkable tile.
    Floor,
    /// A solid tile.
    Wall,
    /// A tile that may be entered from any side except from above.
    Oneway,
}

/// The immutable tile grid every entity moves through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// Row-major tiles.
    tiles: Vec<TileType>,
    width: usize,
    height: usize,
}

impl Maze {
    /// Creates a maze from a row-major grid.
    ///
    /// # Errors
    ///
    /// Fails on a grid with no rows, empty rows, or rows of differing length.
    pub fn new(grid: Vec<Vec<TileType>>) -> Result<Self, MapError> {
        let height = grid.len();
        if height == 0 {
            return Err(MapError::EmptyGrid);
        }
        let width = grid[0].len();
        if width == 0 {
            return Err(MapError::ZeroWidth);
        }
        if let Some((row, found)) = grid.iter().map(Vec::len).enumerate().find(|(_, len)| *len != width) {
            return Err(MapError::NonRectangular {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            tiles: grid.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Width of the maze, in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the maze, in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Size of the maze, in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * TILE_SIZE
    }

    /// Returns true if the tile lies inside the grid.
    pub fn contains(&self, tile: IVec2) -> bool {
        tile.x >= 0 && tile.y >= 0 && (tile.x as usize) < self.width && (tile.y as usize) < self.height
    }

    /// Returns the tile at the given coordinates, or `None` outside the grid.
    pub fn get_tile(&self, tile: IVec2) -> Option<TileType> {
        if !self.contains(tile) {
            return None;
        }
        self.tiles.get(tile.y as usize * self.width + tile.x as usize).copied()
    }

    pub fn is_wall(&self, tile: IVec2) -> bool {
        self.get_tile(tile) == Some(TileType::Wall)
    }

    pub fn is_oneway(&self, tile: IVec2) -> bool {
        self.get_tile(tile) == Some(TileType::Oneway)
    }

    /// Returns true if the tile is inside the grid and is plain floor.
    pub fn is_floor(&self, tile: IVec2) -> bool {
        self.get_tile(tile) == Some(TileType::Floor)
    }

    /// Maps any tile coordinate back onto the grid, the way movement wraps across edges.
    pub fn wrap_tile(&self, tile: IVec2) -> IVec2 {
        IVec2::new(
            tile.x.rem_euclid(self.width as i32),
            tile.y.rem_euclid(self.height as i32),
        )
    }

    /// Returns true if an entity standing on `from` may step onto `to`.
    ///
    /// The destination is looked up after wrapping, so stepping off one edge is legal exactly when
    /// the tile on the opposite edge is. Walls are never enterable, floor always is, and a one-way
    /// tile rejects entry only while moving down into it (`from.y < to.y`).
    pub fn can_move(&self, from: IVec2, to: IVec2) -> bool {
        match self.get_tile(self.wrap_tile(to)) {
            Some(TileType::Wall) => false,
            Some(TileType::Oneway) => from.y >= to.y,
            Some(TileType::Floor) | None => true,
        }
    }

    /// Returns true if an entity on `tile` may step one tile in `direction`.
    pub fn can_move_to_dir(&self, tile: IVec2, direction: Direction) -> bool {
        self.can_move(tile, tile + direction.as_ivec2())
    }

    /// Pixel coordinate of the exact middle of a tile.
    pub fn tile_center(tile: IVec2) -> Vec2 {
        (tile.as_vec2() + Vec2::splat(0.5)) * TILE_SIZE
    }

    /// The tile that contains a pixel coordinate.
    pub fn pixel_to_tile(pixel: Vec2) -> IVec2 {
        (pixel / TILE_SIZE).floor().as_ivec2()
    }

    /// Every tile reachable from `start` under the movement rules, wrap-around included.
    pub fn reachable_from(&self, start: IVec2) -> HashSet<IVec2> {
        if self.is_wall(start) || !self.contains(start) {
            return HashSet::new();
        }

        bfs_reach(start, |&tile| {
            Direction::DIRECTIONS
                .into_iter()
                .filter(move |&dir| self.can_move_to_dir(tile, dir))
                .map(move |dir| self.wrap_tile(tile + dir.as_ivec2()))
        })
        .collect()
    }

    /// Iterates over every tile in row-major order with its coordinate.
    pub fn tiles(&self) -> impl Iterator<Item = (IVec2, TileType)> + '_ {
        self.tiles.iter().enumerate().map(|(i, &tile)| {
            let coord = IVec2::new((i % self.width) as i32, (i / self.width) as i32);
            (coord, tile)
        })
    }
}
