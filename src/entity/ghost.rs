//! Pursuer entity implementation.
//!
//! A pursuer carries two orthogonal state machines. The physical state says where it is in its
//! life cycle (penned, leaving the house, roaming, heading home after capture); the behavior state
//! says how it picks targets while roaming. Steering is the same greedy rule for every behavior:
//! at each new tile center, take the legal non-reversing step that lands closest to the target.

use glam::{IVec2, Vec2};
use rand::{rngs::SmallRng, seq::IndexedRandom};
use smallvec::SmallVec;
use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::{debug, trace, warn};

use crate::config::GameConfig;
use crate::constants::HOUSE_BOB_AMPLITUDE;
use crate::entity::pacman::Player;
use crate::entity::targeting::{chase_target, Seeker};
use crate::entity::Mover;
use crate::events::GameEvent;
use crate::game::world::World;
use crate::map::{direction::Direction, Maze};
use crate::render::Color;

/// The four pursuer roles, in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    pub const ALL: [GhostType; 4] = [GhostType::Blinky, GhostType::Pinky, GhostType::Inky, GhostType::Clyde];

    /// Index into per-role tables such as release delays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color drawn while scattering or chasing.
    pub const fn base_color(self) -> Color {
        match self {
            GhostType::Blinky => Color::rgb(255, 0, 0),
            GhostType::Pinky => Color::rgb(255, 184, 255),
            GhostType::Inky => Color::rgb(0, 255, 255),
            GhostType::Clyde => Color::rgb(255, 184, 82),
        }
    }

    /// The corner, just outside the maze, this role heads for while scattering.
    pub fn scatter_tile(self, maze: &Maze) -> IVec2 {
        let (width, height) = (maze.width() as i32, maze.height() as i32);
        match self {
            GhostType::Blinky => IVec2::new(width - 1, -1),
            GhostType::Pinky => IVec2::new(1, -1),
            GhostType::Inky => IVec2::new(width - 1, height),
            GhostType::Clyde => IVec2::new(0, height),
        }
    }
}

/// Where a pursuer is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PhysicalState {
    /// Bobbing in the pen, waiting for its release delay.
    InHouse,
    /// Walking from the pen to the house exit, ignoring walls.
    LeavingHouse,
    /// Roaming the maze.
    Active,
    /// Captured; heading back to the house exit.
    Returning,
}

/// How a pursuer picks its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BehaviorState {
    Scatter,
    Chase,
    Frightened,
    Eaten,
}

/// Per-state movement speeds, in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GhostSpeeds {
    normal: f32,
    frightened: f32,
    eaten: f32,
    house: f32,
}

/// A single pursuer.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    role: GhostType,
    mover: Mover,
    physical: PhysicalState,
    behavior: BehaviorState,
    target: IVec2,
    scatter_tile: IVec2,
    house_exit: IVec2,
    /// Pixel the pursuer bobs around while penned.
    home_pixel: Vec2,
    release_delay: f32,
    /// Seconds spent in the house so far.
    house_timer: f32,
    /// The tile of the last steering decision; at most one decision is made per tile visit.
    last_decision_tile: Option<IVec2>,
    speeds: GhostSpeeds,
}

impl Ghost {
    /// Creates a pursuer on `start`.
    ///
    /// A pursuer that starts on the house exit tile is already outside and starts active, heading
    /// left. Any other pursuer starts penned.
    pub fn new(
        role: GhostType,
        maze: &Maze,
        start: IVec2,
        house_exit: IVec2,
        behavior: BehaviorState,
        config: &GameConfig,
    ) -> Self {
        let speeds = GhostSpeeds {
            normal: config.ghost_speed,
            frightened: config.ghost_frightened_speed,
            eaten: config.ghost_eaten_speed,
            house: config.ghost_house_speed,
        };
        let (physical, direction) = if start == house_exit {
            (PhysicalState::Active, Direction::Left)
        } else {
            (PhysicalState::InHouse, Direction::Up)
        };
        let mover = Mover::spawn(maze, start, direction, speeds.house);

        let mut ghost = Self {
            role,
            home_pixel: mover.pixel(),
            mover,
            physical,
            behavior,
            target: IVec2::ZERO,
            scatter_tile: role.scatter_tile(maze),
            house_exit,
            release_delay: config.release_delays[role.index()],
            house_timer: 0.0,
            last_decision_tile: None,
            speeds,
        };
        ghost.target = ghost.scatter_tile;
        ghost.sync_speed();
        ghost
    }

    pub fn role(&self) -> GhostType {
        self.role
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut Mover {
        &mut self.mover
    }

    pub fn tile(&self) -> IVec2 {
        self.mover.tile()
    }

    pub fn pixel(&self) -> Vec2 {
        self.mover.pixel()
    }

    pub fn direction(&self) -> Direction {
        self.mover.direction
    }

    pub fn speed(&self) -> f32 {
        self.mover.speed
    }

    pub fn physical_state(&self) -> PhysicalState {
        self.physical
    }

    pub fn behavior_state(&self) -> BehaviorState {
        self.behavior
    }

    /// The tile the pursuer is currently steering toward. May lie outside the maze.
    pub fn target(&self) -> IVec2 {
        self.target
    }

    pub fn scatter_tile(&self) -> IVec2 {
        self.scatter_tile
    }

    pub fn house_exit(&self) -> IVec2 {
        self.house_exit
    }

    /// The color to draw, which depends on the behavior state.
    pub fn color(&self) -> Color {
        match (self.physical, self.behavior) {
            (PhysicalState::Returning, _) | (_, BehaviorState::Eaten) => Color::rgb(222, 222, 255),
            (_, BehaviorState::Frightened) => Color::rgb(33, 33, 255),
            _ => self.role.base_color(),
        }
    }

    fn sync_speed(&mut self) {
        self.mover.speed = match self.physical {
            PhysicalState::InHouse | PhysicalState::LeavingHouse => self.speeds.house,
            PhysicalState::Returning => self.speeds.eaten,
            PhysicalState::Active => match self.behavior {
                BehaviorState::Frightened => self.speeds.frightened,
                BehaviorState::Eaten => self.speeds.eaten,
                BehaviorState::Scatter | BehaviorState::Chase => self.speeds.normal,
            },
        };
    }

    /// Switches behavior. Switching between scatter and chase reverses the heading.
    pub fn set_behavior(&mut self, behavior: BehaviorState) {
        let previous = self.behavior;
        if previous == behavior {
            return;
        }
        if matches!(
            (previous, behavior),
            (BehaviorState::Scatter, BehaviorState::Chase) | (BehaviorState::Chase, BehaviorState::Scatter)
        ) {
            self.mover.direction = self.mover.direction.opposite();
        }
        trace!(ghost = ?self.role, from = ?previous, to = ?behavior, "Behavior changed");
        self.behavior = behavior;
        self.sync_speed();
    }

    /// Enters the frightened behavior.
    ///
    /// Applies in the house as well as in the maze. A pursuer on its way home stays eaten until it
    /// reaches the house exit.
    pub fn frighten(&mut self) {
        if self.physical == PhysicalState::Returning || self.behavior == BehaviorState::Eaten {
            trace!(ghost = ?self.role, "Returning ghost ignores power-up");
            return;
        }
        self.set_behavior(BehaviorState::Frightened);
    }

    fn become_eaten(&mut self) {
        debug!(ghost = ?self.role, tile = ?self.tile(), "Ghost eaten, returning home");
        self.behavior = BehaviorState::Eaten;
        self.physical = PhysicalState::Returning;
        self.target = self.house_exit;
        self.sync_speed();
    }

    /// Recomputes the target for the current state from the snapshot.
    ///
    /// Frightened pursuers keep their target; it is re-rolled at each steering decision instead.
    pub fn update_target(&mut self, world: &World) {
        self.target = match (self.physical, self.behavior) {
            (PhysicalState::Returning, _) | (_, BehaviorState::Eaten) => self.house_exit,
            (_, BehaviorState::Frightened) => self.target,
            (_, BehaviorState::Scatter) => self.scatter_tile,
            (_, BehaviorState::Chase) => chase_target(
                self.role,
                Seeker {
                    tile: self.tile(),
                    scatter_tile: self.scatter_tile,
                },
                world,
            ),
        };
    }

    /// Advances the pursuer by `delta` seconds.
    ///
    /// Returns an event when the pursuer leaves the house or finishes returning to it.
    pub fn update(&mut self, delta: f32, world: &World, maze: &Maze, rng: &mut SmallRng) -> Option<GameEvent> {
        match self.physical {
            PhysicalState::InHouse => {
                self.house_timer += delta;
                if self.house_timer >= self.release_delay {
                    debug!(ghost = ?self.role, waited = self.house_timer, "Ghost leaving house");
                    self.physical = PhysicalState::LeavingHouse;
                    self.sync_speed();
                } else {
                    self.bob(delta, maze);
                }
                None
            }
            PhysicalState::LeavingHouse => {
                if !self.walk_to_exit(delta, maze) {
                    return None;
                }
                debug!(ghost = ?self.role, tile = ?self.tile(), "Ghost released");
                self.physical = PhysicalState::Active;
                self.mover.direction = Direction::Left;
                self.last_decision_tile = None;
                self.sync_speed();
                Some(GameEvent::GhostReleased(self.role))
            }
            PhysicalState::Active | PhysicalState::Returning => {
                self.update_target(world);
                self.travel(delta, world, maze, rng)
            }
        }
    }

    /// Moves up and down around the pen position.
    fn bob(&mut self, delta: f32, maze: &Maze) {
        if self.mover.direction.is_horizontal() {
            self.mover.direction = Direction::Up;
        }
        self.mover.move_by(delta, maze);

        let offset = self.mover.pixel().y - self.home_pixel.y;
        if offset <= -HOUSE_BOB_AMPLITUDE || offset >= HOUSE_BOB_AMPLITUDE {
            let clamped = offset.clamp(-HOUSE_BOB_AMPLITUDE, HOUSE_BOB_AMPLITUDE);
            self.mover.set_pixel(Vec2::new(self.home_pixel.x, self.home_pixel.y + clamped), maze);
            self.mover.direction = self.mover.direction.opposite();
        }
    }

    /// Walks toward the exit tile's center, horizontally first, ignoring walls.
    ///
    /// Returns true once the exit center is reached.
    fn walk_to_exit(&mut self, delta: f32, maze: &Maze) -> bool {
        let goal = Maze::tile_center(self.house_exit);
        let mut budget = self.mover.speed * delta;
        let mut pixel = self.mover.pixel();

        let dx = goal.x - pixel.x;
        if dx != 0.0 {
            if budget >= dx.abs() {
                pixel.x = goal.x;
                budget -= dx.abs();
            } else {
                pixel.x += budget * dx.signum();
                budget = 0.0;
            }
            self.mover.direction = if dx > 0.0 { Direction::Right } else { Direction::Left };
        }

        let dy = goal.y - pixel.y;
        if budget > 0.0 && dy != 0.0 {
            pixel.y = if budget >= dy.abs() { goal.y } else { pixel.y + budget * dy.signum() };
            self.mover.direction = if dy > 0.0 { Direction::Down } else { Direction::Up };
        }

        self.mover.set_pixel(pixel, maze);
        pixel == goal
    }

    /// Grid movement for active and returning pursuers.
    fn travel(&mut self, delta: f32, world: &World, maze: &Maze, rng: &mut SmallRng) -> Option<GameEvent> {
        let mut budget = self.mover.speed * delta;
        let mut forced = false;

        loop {
            if self.mover.is_on_tile_center() && self.last_decision_tile != Some(self.tile()) {
                self.mover.snap_to_center();
                self.decide(maze, rng);
                self.last_decision_tile = Some(self.tile());
            }
            if budget <= 0.0 {
                break;
            }

            let moved = self.mover.advance(budget, maze);
            if moved <= 0.0 {
                if forced {
                    warn!(ghost = ?self.role, tile = ?self.tile(), "Ghost has no legal move");
                    break;
                }
                // Blocked on a center already decided; decide again
                forced = true;
                self.last_decision_tile = None;
                continue;
            }
            budget -= moved;

            if self.physical == PhysicalState::Returning && self.tile() == self.house_exit {
                self.physical = PhysicalState::Active;
                self.behavior = world.current_behavior_state;
                self.update_target(world);
                self.sync_speed();
                debug!(ghost = ?self.role, behavior = ?self.behavior, "Ghost returned to house exit");
                return Some(GameEvent::GhostReturned(self.role));
            }
        }

        None
    }

    /// Picks a new heading at a tile center.
    fn decide(&mut self, maze: &Maze, rng: &mut SmallRng) {
        let tile = self.tile();
        if self.physical == PhysicalState::Active && self.behavior == BehaviorState::Frightened {
            let options = candidate_directions(maze, tile, self.mover.direction);
            if let Some(&wander) = options.choose(rng) {
                self.target = tile + wander.as_ivec2();
            }
        }

        let direction = choose_best_dir(maze, tile, self.mover.direction, self.target);
        if direction != self.mover.direction {
            trace!(ghost = ?self.role, tile = ?tile, from = ?self.mover.direction, to = ?direction, target = ?self.target, "Ghost turned");
        }
        self.mover.direction = direction;
    }

    /// Resolves contact with the player.
    ///
    /// Only active pursuers interact. A frightened pursuer touched by the player is captured and
    /// starts returning home; the return value is true only when the player is caught.
    pub fn handle_player_collision(&mut self, player: &Player, range: f32) -> bool {
        if self.physical != PhysicalState::Active || self.behavior == BehaviorState::Eaten {
            return false;
        }

        let player = player.mover();
        if !(self.mover.collides_with(player, range) || self.mover.crossed_paths(player)) {
            return false;
        }
        if self.behavior == BehaviorState::Frightened {
            self.become_eaten();
            return false;
        }
        true
    }
}

/// The directions a pursuer on `tile`, heading `heading`, may take next.
///
/// Every legal direction except the reverse, in priority order. At a dead end the reverse is the
/// only candidate.
pub fn candidate_directions(maze: &Maze, tile: IVec2, heading: Direction) -> SmallVec<[Direction; 4]> {
    let reverse = heading.opposite();
    let mut options: SmallVec<[Direction; 4]> = Direction::DIRECTIONS
        .into_iter()
        .filter(|&dir| dir != reverse && maze.can_move_to_dir(tile, dir))
        .collect();
    if options.is_empty() {
        options.push(reverse);
    }
    options
}

/// Picks the candidate direction whose next tile is closest to `target`.
///
/// Distance is squared Euclidean. Ties go to the earlier direction in [`Direction::DIRECTIONS`].
pub fn choose_best_dir(maze: &Maze, tile: IVec2, heading: Direction, target: IVec2) -> Direction {
    let mut best: Option<(Direction, i64)> = None;
    for dir in candidate_directions(maze, tile, heading) {
        let offset = (tile + dir.as_ivec2() - target).as_i64vec2();
        let distance = offset.length_squared();
        match best {
            Some((_, shortest)) if distance >= shortest => {}
            _ => best = Some((dir, distance)),
        }
    }
    best.map_or(heading.opposite(), |(dir, _)| dir)
}
