//! Centralized error types for the maze-chase core.
//!
//! Only construction can fail. Once a [`crate::game::Game`] exists, every tick is infallible:
//! out-of-range lookups resolve to sentinels and bad spawns fall back to a safe tile.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Board has no rows")]
    EmptyBoard,
    #[error("Invalid board width at line {row}: expected {expected}, got {found}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Board has no house door ('=')")]
    MissingHouseDoor,
    #[error("House door at ({x}, {y}) has no tile above it to exit onto")]
    DoorOnTopEdge { x: i32, y: i32 },
    #[error("Spawn marker {0:?} is missing")]
    MissingSpawn(char),
    #[error("Spawn marker {0:?} appears more than once")]
    DuplicateSpawn(char),
}

/// Errors related to map construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Map grid has zero height")]
    EmptyGrid,
    #[error("Map grid has zero width")]
    ZeroWidth,
    #[error("Map grid is not rectangular: row {row} has {found} tiles, expected {expected}")]
    NonRectangular { row: usize, expected: usize, found: usize },
    #[error("Food grid is {found_width}x{found_height}, map is {width}x{height}")]
    FoodShapeMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
}

/// Errors for gameplay tunables that cannot produce a sane game.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite and not negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("Mode schedule must contain at least one duration")]
    EmptySchedule,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
