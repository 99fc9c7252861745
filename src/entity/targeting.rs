//! Chase targeting rules, one pure function per pursuer role.
//!
//! The rules only read the [`World`] snapshot and the asking pursuer's own tiles, so they can be
//! evaluated in any order without observing each other's movement within a tick.

use glam::IVec2;

use crate::config::GameConfig;
use crate::entity::ghost::GhostType;
use crate::game::world::World;

/// Distances the positional rules read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetingTuning {
    /// Tiles ahead of the player the ambusher aims at.
    pub ambush_tiles_ahead: i32,
    /// Tiles ahead of the player the flanker pivots around.
    pub flank_tiles_ahead: i32,
    /// Radius, in tiles, inside which the wanderer chases.
    pub wander_radius_tiles: f32,
}

impl From<&GameConfig> for TargetingTuning {
    fn from(config: &GameConfig) -> Self {
        Self {
            ambush_tiles_ahead: config.ambush_tiles_ahead,
            flank_tiles_ahead: config.flank_tiles_ahead,
            wander_radius_tiles: config.wander_radius_tiles,
        }
    }
}

/// The asking pursuer's own position data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeker {
    pub tile: IVec2,
    pub scatter_tile: IVec2,
}

/// A chase rule: maps the asking pursuer and the snapshot to a target tile.
pub type ChaseRule = fn(Seeker, &World) -> IVec2;

/// Chase rules indexed by [`GhostType::index`].
const CHASE_RULES: [ChaseRule; 4] = [direct, ambush, flank, wander];

/// Returns the tile `role` steers toward while chasing.
///
/// The result may lie outside the maze; targets are only ever compared by distance.
pub fn chase_target(role: GhostType, seeker: Seeker, world: &World) -> IVec2 {
    CHASE_RULES[role.index()](seeker, world)
}

/// Aims straight at the player.
fn direct(_seeker: Seeker, world: &World) -> IVec2 {
    world.player.tile
}

/// Aims a few tiles ahead of the player.
fn ambush(_seeker: Seeker, world: &World) -> IVec2 {
    world.player.tile + world.player.direction.as_ivec2() * world.tuning.ambush_tiles_ahead
}

/// Reflects the lead pursuer through a pivot ahead of the player.
fn flank(_seeker: Seeker, world: &World) -> IVec2 {
    let pivot = world.player.tile + world.player.direction.as_ivec2() * world.tuning.flank_tiles_ahead;
    match world.lead_pursuer_tile() {
        Some(lead) => pivot * 2 - lead,
        None => pivot,
    }
}

/// Chases while inside the wander radius, heads for its corner otherwise.
fn wander(seeker: Seeker, world: &World) -> IVec2 {
    let distance = (seeker.tile - world.player.tile).as_vec2().length();
    if distance < world.tuning.wander_radius_tiles {
        world.player.tile
    } else {
        seeker.scatter_tile
    }
}
