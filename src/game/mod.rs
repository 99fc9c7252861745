//! This module contains the main game logic and state.

pub mod schedule;
pub mod world;

use bevy_ecs::event::Events;
use glam::IVec2;
use rand::{rngs::SmallRng, SeedableRng};
use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::config::GameConfig;
use crate::entity::{
    ghost::{BehaviorState, Ghost, GhostType},
    pacman::Player,
    targeting::TargetingTuning,
};
use crate::error::{GameResult, MapError};
use crate::events::{GameEvent, PlayerEvent};
use crate::input::InputSource;
use crate::map::{
    food::FoodLayer,
    parser::{BoardParser, ParsedBoard},
    Maze,
};
use crate::render::{Frame, GhostFrame, PlayerFrame};

use self::schedule::ModeScheduler;
use self::world::World;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every pickup was eaten.
    Won,
    /// A pursuer caught the player.
    Lost,
}

/// Owns the maze, the food and every entity, and advances them one tick at a time.
pub struct Game {
    config: GameConfig,
    maze: Maze,
    food: FoodLayer,
    player: Player,
    ghosts: SmallVec<[Ghost; 4]>,
    scheduler: ModeScheduler,
    house_exit: IVec2,
    rng: SmallRng,
    running: bool,
    outcome: Option<Outcome>,
    /// Simulated seconds since the game started.
    elapsed: f32,
    events: Events<GameEvent>,
}

impl Game {
    /// Builds a game from raw board rows.
    pub fn from_board<S: AsRef<str>>(raw_board: &[S], config: GameConfig) -> GameResult<Self> {
        let board = BoardParser::parse_board(raw_board)?;
        Self::new(board, config)
    }

    /// Builds a game from a parsed board.
    pub fn new(board: ParsedBoard, config: GameConfig) -> GameResult<Self> {
        let maze = Maze::new(board.tiles)?;
        let food = FoodLayer::new(board.food)?;
        Self::from_parts(maze, food, board.player_start, board.ghost_starts, board.house_exit, config)
    }

    /// Builds a game from an already constructed maze and food layer.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or when the food grid does not match the maze.
    pub fn from_parts(
        maze: Maze,
        food: FoodLayer,
        player_start: IVec2,
        ghost_starts: [IVec2; 4],
        house_exit: IVec2,
        config: GameConfig,
    ) -> GameResult<Self> {
        config.validate()?;
        if food.width() != maze.width() || food.height() != maze.height() {
            return Err(MapError::FoodShapeMismatch {
                width: maze.width(),
                height: maze.height(),
                found_width: food.width(),
                found_height: food.height(),
            }
            .into());
        }

        let reachable = maze.reachable_from(player_start);
        let stranded = food.iter().filter(|(tile, _)| !reachable.contains(tile)).count();
        if stranded > 0 {
            warn!(stranded, total = food.remaining(), "Some food cannot be reached from the player start");
        }

        let scheduler = ModeScheduler::new(config.mode_schedule.clone());
        let player = Player::new(&maze, player_start, config.player_speed, config.power_up_time);
        let ghosts = GhostType::ALL
            .into_iter()
            .zip(ghost_starts)
            .map(|(role, start)| Ghost::new(role, &maze, start, house_exit, scheduler.current_mode(), &config))
            .collect();
        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        debug!(
            width = maze.width(),
            height = maze.height(),
            food = food.remaining(),
            house_exit = ?house_exit,
            "Game created"
        );

        Ok(Self {
            config,
            maze,
            food,
            player,
            ghosts,
            scheduler,
            house_exit,
            rng,
            running: true,
            outcome: None,
            elapsed: 0.0,
            events: Events::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn food(&self) -> &FoodLayer {
        &self.food
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghost(&self, role: GhostType) -> Option<&Ghost> {
        self.ghosts.iter().find(|ghost| ghost.role() == role)
    }

    pub fn house_exit(&self) -> IVec2 {
        self.house_exit
    }

    /// The mode the scheduler currently broadcasts.
    pub fn current_mode(&self) -> BehaviorState {
        self.scheduler.current_mode()
    }

    pub fn scheduler(&self) -> &ModeScheduler {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Halts the game. Later ticks are no-ops.
    pub fn stop(&mut self) {
        if self.running {
            debug!(elapsed = self.elapsed, "Game stopped");
        }
        self.running = false;
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(outcome = ?outcome, elapsed = self.elapsed, food_left = self.food.remaining(), "Game over");
        self.outcome = Some(outcome);
        self.stop();
    }

    fn emit(&mut self, event: GameEvent) {
        trace!(event = ?event, "Game event");
        self.events.extend([event]);
    }

    /// Takes every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    /// The snapshot pursuers see this tick.
    pub fn world(&self) -> World {
        World::capture(
            &self.player,
            &self.ghosts,
            self.scheduler.current_mode(),
            TargetingTuning::from(&self.config),
        )
    }

    /// Applies a scheduled mode to every pursuer that is not on its way home.
    fn broadcast_mode(&mut self, mode: BehaviorState) {
        for ghost in self.ghosts.iter_mut().filter(|ghost| ghost.behavior_state() != BehaviorState::Eaten) {
            ghost.set_behavior(mode);
        }
    }

    /// Advances the simulation by `delta` seconds.
    ///
    /// Order: mode timeline, input, player, food check, pursuers, collisions. Negative deltas are
    /// treated as zero and deltas above the configured maximum are clamped. Returns whether the
    /// game is still running afterwards.
    pub fn tick(&mut self, delta: f32, input: &dyn InputSource) -> bool {
        if !self.running {
            return false;
        }

        let delta = if delta.is_finite() { delta.clamp(0.0, self.config.max_tick_delta) } else { 0.0 };
        self.elapsed += delta;

        let frozen = self.player.is_power_up_active();
        if let Some(mode) = self.scheduler.update(delta, frozen) {
            self.broadcast_mode(mode);
            self.emit(GameEvent::ModeChanged(mode));
        }

        if let Some(direction) = input.requested_direction() {
            self.player.set_dir(direction);
        }

        self.player.mover_mut().begin_tick();
        for ghost in self.ghosts.iter_mut() {
            ghost.mover_mut().begin_tick();
        }

        match self.player.update(delta, &self.maze, &mut self.food) {
            Some(PlayerEvent::PowerUp) => {
                for ghost in self.ghosts.iter_mut() {
                    ghost.frighten();
                }
                self.emit(GameEvent::PowerUpStarted);
            }
            Some(PlayerEvent::PowerUpEnd) => {
                self.broadcast_mode(self.scheduler.current_mode());
                self.emit(GameEvent::PowerUpEnded);
            }
            None => {}
        }

        if self.food.is_cleared() {
            self.emit(GameEvent::LevelCleared);
            self.finish(Outcome::Won);
            return false;
        }

        let world = self.world();
        let mut raised: SmallVec<[GameEvent; 4]> = SmallVec::new();
        for ghost in self.ghosts.iter_mut() {
            if let Some(event) = ghost.update(delta, &world, &self.maze, &mut self.rng) {
                raised.push(event);
            }
        }

        let range = self.config.collision_range;
        let mut caught_by = None;
        for ghost in self.ghosts.iter_mut() {
            let was_eaten = ghost.behavior_state() == BehaviorState::Eaten;
            if ghost.handle_player_collision(&self.player, range) {
                if caught_by.is_none() {
                    caught_by = Some(ghost.role());
                }
            } else if !was_eaten && ghost.behavior_state() == BehaviorState::Eaten {
                raised.push(GameEvent::GhostEaten(ghost.role()));
            }
        }
        for event in raised {
            self.emit(event);
        }

        if let Some(role) = caught_by {
            self.emit(GameEvent::PlayerCaught(role));
            self.finish(Outcome::Lost);
            return false;
        }

        true
    }

    /// Everything a renderer needs for the current state.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            maze: &self.maze,
            food: &self.food,
            player: PlayerFrame {
                pixel: self.player.pixel(),
                direction: self.player.direction(),
                is_moving: self.player.is_moving(),
                elapsed: self.elapsed,
            },
            ghosts: self
                .ghosts
                .iter()
                .map(|ghost| GhostFrame {
                    role: ghost.role(),
                    pixel: ghost.pixel(),
                    color: ghost.color(),
                    target: ghost.target(),
                    physical: ghost.physical_state(),
                    behavior: ghost.behavior_state(),
                })
                .collect(),
        }
    }
}
