//! Maze-chase game core library crate.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod game;
pub mod input;
pub mod map;
pub mod render;
