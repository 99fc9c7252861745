//! The read-only view handed to renderers, plus a plain-text renderer.

use glam::{IVec2, Vec2};
use smallvec::SmallVec;

use crate::entity::ghost::{BehaviorState, GhostType, PhysicalState};
use crate::map::{direction::Direction, food::FoodLayer, food::FoodType, Maze, TileType};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerFrame {
    pub pixel: Vec2,
    pub direction: Direction,
    pub is_moving: bool,
    /// Seconds since the game started, for animation.
    pub elapsed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostFrame {
    pub role: GhostType,
    pub pixel: Vec2,
    pub color: Color,
    /// Debug aid: the tile this pursuer is steering toward.
    pub target: IVec2,
    pub physical: PhysicalState,
    pub behavior: BehaviorState,
}

/// Everything needed to draw one frame. Borrowed from the game; never mutates it.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub maze: &'a Maze,
    pub food: &'a FoodLayer,
    pub player: PlayerFrame,
    pub ghosts: SmallVec<[GhostFrame; 4]>,
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Draws frames as text, one character per tile.
///
/// `#` wall, `=` door, `.` pellet, `o` power pellet, `@` player; pursuers use the first letter of
/// their role, `f` while frightened and `"` while heading home.
#[derive(Debug, Clone, Default)]
pub struct AsciiRenderer {
    output: String,
}

impl AsciiRenderer {
    /// The most recently rendered frame.
    pub fn output(&self) -> &str {
        &self.output
    }
}

fn ghost_glyph(ghost: &GhostFrame) -> char {
    if ghost.physical == PhysicalState::Returning || ghost.behavior == BehaviorState::Eaten {
        return '"';
    }
    if ghost.behavior == BehaviorState::Frightened {
        return 'f';
    }
    match ghost.role {
        GhostType::Blinky => 'B',
        GhostType::Pinky => 'P',
        GhostType::Inky => 'I',
        GhostType::Clyde => 'C',
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        let (width, height) = (frame.maze.width(), frame.maze.height());
        let mut grid: Vec<Vec<char>> = frame
            .maze
            .tiles()
            .map(|(tile, kind)| match (kind, frame.food.get(tile)) {
                (TileType::Wall, _) => '#',
                (TileType::Oneway, _) => '=',
                (TileType::Floor, FoodType::Normal) => '.',
                (TileType::Floor, FoodType::Special) => 'o',
                (TileType::Floor, FoodType::None) => ' ',
            })
            .collect::<Vec<_>>()
            .chunks(width)
            .map(<[char]>::to_vec)
            .collect();

        let mut place = |pixel: Vec2, glyph: char| {
            let tile = Maze::pixel_to_tile(pixel);
            if frame.maze.contains(tile) {
                grid[tile.y as usize][tile.x as usize] = glyph;
            }
        };
        for ghost in &frame.ghosts {
            place(ghost.pixel, ghost_glyph(ghost));
        }
        place(frame.player.pixel, '@');

        self.output.clear();
        for row in grid.iter().take(height) {
            self.output.extend(row.iter());
            self.output.push('\n');
        }
    }
}
