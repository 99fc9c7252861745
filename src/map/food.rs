//! The mutable pickup layer laid over the maze.

use glam::IVec2;

use crate::error::MapError;

/// What, if anything, lies on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FoodType {
    #[default]
    None,
    Normal,
    Special,
}

/// Per-tile pickup state plus a running count of what is left.
///
/// This is the only owner of the food grid; everything else reads it through accessors.
/// `remaining` always equals the number of tiles whose food is not [`FoodType::None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodLayer {
    /// Row-major cells.
    cells: Vec<FoodType>,
    width: usize,
    height: usize,
    remaining: usize,
}

impl FoodLayer {
    /// Creates a food layer from a row-major grid.
    ///
    /// # Errors
    ///
    /// Fails on an empty or non-rectangular grid.
    pub fn new(grid: Vec<Vec<FoodType>>) -> Result<Self, MapError> {
        let height = grid.len();
        if height == 0 {
            return Err(MapError::EmptyGrid);
        }
        let width = grid[0].len();
        if let Some((row, found)) = grid.iter().map(Vec::len).enumerate().find(|(_, len)| *len != width) {
            return Err(MapError::NonRectangular {
                row,
                expected: width,
                found,
            });
        }

        let cells: Vec<FoodType> = grid.into_iter().flatten().collect();
        let remaining = cells.iter().filter(|food| **food != FoodType::None).count();

        Ok(Self {
            cells,
            width,
            height,
            remaining,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, tile: IVec2) -> Option<usize> {
        if tile.x < 0 || tile.y < 0 || tile.x as usize >= self.width || tile.y as usize >= self.height {
            return None;
        }
        Some(tile.y as usize * self.width + tile.x as usize)
    }

    /// Returns the food on a tile. Tiles outside the grid hold nothing.
    pub fn get(&self, tile: IVec2) -> FoodType {
        self.index(tile).map_or(FoodType::None, |i| self.cells[i])
    }

    /// Returns true if any food lies on the tile.
    pub fn has(&self, tile: IVec2) -> bool {
        !self.is_none(tile)
    }

    pub fn is_none(&self, tile: IVec2) -> bool {
        self.get(tile) == FoodType::None
    }

    pub fn is_special(&self, tile: IVec2) -> bool {
        self.get(tile) == FoodType::Special
    }

    /// Removes the food on a tile and returns what was there.
    ///
    /// Eating an empty (or out-of-range) tile is a no-op that returns [`FoodType::None`].
    pub fn eat(&mut self, tile: IVec2) -> FoodType {
        let Some(i) = self.index(tile) else {
            return FoodType::None;
        };
        let eaten = std::mem::take(&mut self.cells[i]);
        if eaten != FoodType::None {
            self.remaining -= 1;
        }
        eaten
    }

    /// Number of tiles that still hold food.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True once every pickup has been eaten.
    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    /// Iterates over every tile that still holds food.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, FoodType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, food)| **food != FoodType::None)
            .map(|(i, &food)| (IVec2::new((i % self.width) as i32, (i / self.width) as i32), food))
    }
}
