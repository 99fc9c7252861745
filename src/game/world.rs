//! The read-only snapshot pursuers consult while choosing targets.

use glam::{IVec2, Vec2};
use smallvec::SmallVec;

use crate::entity::{
    ghost::{BehaviorState, Ghost, GhostType, PhysicalState},
    pacman::Player,
    targeting::TargetingTuning,
};
use crate::map::direction::Direction;

/// What the pursuers may know about the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub tile: IVec2,
    pub pixel: Vec2,
    pub direction: Direction,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            tile: player.tile(),
            pixel: player.pixel(),
            direction: player.direction(),
        }
    }
}

/// What the pursuers may know about each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostView {
    pub role: GhostType,
    pub tile: IVec2,
    pub physical: PhysicalState,
    pub behavior: BehaviorState,
}

impl From<&Ghost> for GhostView {
    fn from(ghost: &Ghost) -> Self {
        Self {
            role: ghost.role(),
            tile: ghost.tile(),
            physical: ghost.physical_state(),
            behavior: ghost.behavior_state(),
        }
    }
}

/// A copy of the shared state taken once per tick, before any pursuer moves.
///
/// Every pursuer in a tick reads the same snapshot, so update order never leaks into targeting.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub player: PlayerView,
    /// Pursuers in spawn order.
    pub ghosts: SmallVec<[GhostView; 4]>,
    /// The mode the scheduler currently broadcasts.
    pub current_behavior_state: BehaviorState,
    pub tuning: TargetingTuning,
}

impl World {
    pub fn capture(player: &Player, ghosts: &[Ghost], current_behavior_state: BehaviorState, tuning: TargetingTuning) -> Self {
        Self {
            player: PlayerView::from(player),
            ghosts: ghosts.iter().map(GhostView::from).collect(),
            current_behavior_state,
            tuning,
        }
    }

    /// Tile of the pursuer the flanking rule reflects through.
    ///
    /// That is the [`GhostType::Blinky`] pursuer when present, otherwise the first one.
    pub fn lead_pursuer_tile(&self) -> Option<IVec2> {
        self.ghosts
            .iter()
            .find(|ghost| ghost.role == GhostType::Blinky)
            .or_else(|| self.ghosts.first())
            .map(|ghost| ghost.tile)
    }
}
