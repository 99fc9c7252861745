//! Keyboard-style input, reduced to at most one requested direction per tick.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::map::direction::Direction;

/// Anything that can tell the game which way the player wants to go this tick.
pub trait InputSource {
    fn requested_direction(&self) -> Option<Direction>;
}

impl InputSource for Option<Direction> {
    fn requested_direction(&self) -> Option<Direction> {
        *self
    }
}

impl InputSource for Direction {
    fn requested_direction(&self) -> Option<Direction> {
        Some(*self)
    }
}

/// Host-agnostic key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Escape,
}

/// Maps keys to the direction they request, plus the key that ends the game.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<KeyCode, Direction>,
    quit_key: KeyCode,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(KeyCode::Up, Direction::Up);
        key_bindings.insert(KeyCode::W, Direction::Up);
        key_bindings.insert(KeyCode::Down, Direction::Down);
        key_bindings.insert(KeyCode::S, Direction::Down);
        key_bindings.insert(KeyCode::Left, Direction::Left);
        key_bindings.insert(KeyCode::A, Direction::Left);
        key_bindings.insert(KeyCode::Right, Direction::Right);
        key_bindings.insert(KeyCode::D, Direction::Right);

        Self {
            key_bindings,
            quit_key: KeyCode::Escape,
        }
    }
}

impl Bindings {
    pub fn direction(&self, key: KeyCode) -> Option<Direction> {
        self.key_bindings.get(&key).copied()
    }

    pub fn is_quit(&self, key: KeyCode) -> bool {
        key == self.quit_key
    }
}

/// Tracks the most recently pressed direction key that is still held.
///
/// Pressing a direction key makes it the active one. Releasing the active key clears it; releasing
/// any other key changes nothing. The quit key latches a quit request; other keys without a
/// binding are ignored.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    bindings: Bindings,
    active: Option<KeyCode>,
    quit: bool,
}

impl HeldKeys {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            active: None,
            quit: false,
        }
    }

    pub fn key_down(&mut self, key: KeyCode) {
        if self.bindings.is_quit(key) {
            debug!(key = ?key, "Quit requested");
            self.quit = true;
            return;
        }
        if self.bindings.direction(key).is_none() || self.active == Some(key) {
            return;
        }
        trace!(key = ?key, "Direction key pressed");
        self.active = Some(key);
    }

    pub fn key_up(&mut self, key: KeyCode) {
        if self.active == Some(key) {
            trace!(key = ?key, "Direction key released");
            self.active = None;
        }
    }

    /// The active key, if any.
    pub fn active(&self) -> Option<KeyCode> {
        self.active
    }

    /// True once the quit key has been pressed.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl InputSource for HeldKeys {
    fn requested_direction(&self) -> Option<Direction> {
        self.active.and_then(|key| self.bindings.direction(key))
    }
}
