use bevy_ecs::event::Event;

use crate::entity::ghost::{BehaviorState, GhostType};

/// Signal the player raises from a single update, consumed by the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A special pickup was eaten; the power-up timer (re)started.
    PowerUp,
    /// The power-up timer ran out.
    PowerUpEnd,
}

/// Everything the orchestrator announces to its host, queued once per tick.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    PowerUpStarted,
    PowerUpEnded,
    /// The scatter/chase timeline advanced.
    ModeChanged(BehaviorState),
    GhostReleased(GhostType),
    GhostEaten(GhostType),
    GhostReturned(GhostType),
    PlayerCaught(GhostType),
    LevelCleared,
}

impl From<PlayerEvent> for GameEvent {
    fn from(event: PlayerEvent) -> Self {
        match event {
            PlayerEvent::PowerUp => GameEvent::PowerUpStarted,
            PlayerEvent::PowerUpEnd => GameEvent::PowerUpEnded,
        }
    }
}
