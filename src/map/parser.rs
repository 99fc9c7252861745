//! Board parsing functionality for converting raw ASCII layouts into structured data.

use glam::IVec2;

use crate::error::ParseError;
use crate::map::food::FoodType;
use crate::map::TileType;

/// Structured representation of a parsed ASCII board with its special positions extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBoard {
    /// Row-major tile grid.
    pub tiles: Vec<Vec<TileType>>,
    /// Row-major food grid, same shape as `tiles`.
    pub food: Vec<Vec<FoodType>>,
    /// Starting tile for the player (marked by `0`).
    pub player_start: IVec2,
    /// Starting tiles for the four pursuers (marked by `1` through `4`).
    pub ghost_starts: [IVec2; 4],
    /// The tile directly above the first house door tile (`=`).
    pub house_exit: IVec2,
}

/// Parser for converting raw board layouts into structured map data.
pub struct BoardParser;

impl BoardParser {
    /// Converts one ASCII character into its tile and food.
    ///
    /// Walls (`#`), pellets (`.`), power pellets (`o`), floor (` ` and the tunnel marker `T`),
    /// house doors (`=`) and spawn markers (`0`..`4`, floor underneath).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCharacter` for anything else.
    pub fn parse_character(c: char) -> Result<(TileType, FoodType), ParseError> {
        match c {
            '#' => Ok((TileType::Wall, FoodType::None)),
            '.' => Ok((TileType::Floor, FoodType::Normal)),
            'o' => Ok((TileType::Floor, FoodType::Special)),
            ' ' | 'T' => Ok((TileType::Floor, FoodType::None)),
            '=' => Ok((TileType::Oneway, FoodType::None)),
            '0'..='4' => Ok((TileType::Floor, FoodType::None)),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty or ragged, contains unknown characters, lacks a
    /// house door with room above it, or does not mark every spawn exactly once.
    pub fn parse_board<S: AsRef<str>>(raw_board: &[S]) -> Result<ParsedBoard, ParseError> {
        let Some(first) = raw_board.first() else {
            return Err(ParseError::EmptyBoard);
        };
        let width = first.as_ref().chars().count();

        let mut tiles = Vec::with_capacity(raw_board.len());
        let mut food = Vec::with_capacity(raw_board.len());
        let mut spawns: [Option<IVec2>; 5] = [None; 5];
        let mut house_door: Option<IVec2> = None;

        for (y, line) in raw_board.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            let mut tile_row = Vec::with_capacity(width);
            let mut food_row = Vec::with_capacity(width);
            for (x, character) in line.chars().enumerate() {
                let (tile, pickup) = Self::parse_character(character)?;
                let coord = IVec2::new(x as i32, y as i32);

                if let Some(index) = character.to_digit(10) {
                    let slot = &mut spawns[index as usize];
                    if slot.is_some() {
                        return Err(ParseError::DuplicateSpawn(character));
                    }
                    *slot = Some(coord);
                }
                if tile == TileType::Oneway && house_door.is_none() {
                    house_door = Some(coord);
                }

                tile_row.push(tile);
                food_row.push(pickup);
            }
            tiles.push(tile_row);
            food.push(food_row);
        }

        let door = house_door.ok_or(ParseError::MissingHouseDoor)?;
        if door.y == 0 {
            return Err(ParseError::DoorOnTopEdge { x: door.x, y: door.y });
        }

        let spawn = |index: usize| spawns[index].ok_or(ParseError::MissingSpawn(char::from(b'0' + index as u8)));

        Ok(ParsedBoard {
            tiles,
            food,
            player_start: spawn(0)?,
            ghost_starts: [spawn(1)?, spawn(2)?, spawn(3)?, spawn(4)?],
            house_exit: door - IVec2::Y,
        })
    }
}
