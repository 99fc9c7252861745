//! The player-controlled entity.

use glam::{IVec2, Vec2};
use tracing::{debug, trace};

use crate::entity::Mover;
use crate::events::PlayerEvent;
use crate::map::{direction::Direction, food::FoodLayer, food::FoodType, Maze};

/// The player: buffered turning, pickups and the power-up timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    mover: Mover,
    /// The most recent turn request not yet attempted at a tile center.
    input_dir: Option<Direction>,
    is_moving: bool,
    is_power_up_active: bool,
    /// Seconds of power-up left; meaningful only while active.
    power_up_timer: f32,
    power_up_time: f32,
    /// Set after eating; the next update stands still.
    stalled: bool,
}

impl Player {
    pub fn new(maze: &Maze, start: IVec2, speed: f32, power_up_time: f32) -> Self {
        Self {
            mover: Mover::spawn(maze, start, Direction::Left, speed),
            input_dir: None,
            is_moving: false,
            is_power_up_active: false,
            power_up_timer: 0.0,
            power_up_time,
            stalled: false,
        }
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

    /// The pending turn request, if any.
    pub fn input_dir(&self) -> Option<Direction> {
        self.input_dir
    }

    /// True if the last update covered any distance.
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn is_power_up_active(&self) -> bool {
        self.is_power_up_active
    }

    /// Seconds of power-up left, zero when inactive.
    pub fn power_up_remaining(&self) -> f32 {
        if self.is_power_up_active {
            self.power_up_timer
        } else {
            0.0
        }
    }

    /// Buffers a turn request.
    ///
    /// A request for the exact reverse of the current heading takes effect immediately, anywhere.
    /// Any other request waits for the next tile center and is attempted there once.
    pub fn set_dir(&mut self, direction: Direction) {
        if direction == self.mover.direction.opposite() {
            trace!(from = ?self.mover.direction, to = ?direction, "Player reversed");
            self.mover.direction = direction;
            self.input_dir = None;
            return;
        }
        self.input_dir = Some(direction);
    }

    /// Attempts the buffered turn if the player sits on a tile center.
    ///
    /// The attempt is one-shot: the request is cleared whether or not the turn was legal.
    fn try_buffered_turn(&mut self, maze: &Maze) {
        let Some(requested) = self.input_dir else {
            return;
        };
        if requested == self.mover.direction {
            self.input_dir = None;
            return;
        }
        if !self.mover.is_on_tile_center() {
            return;
        }

        if self.mover.can_move_to_dir(maze, requested) {
            trace!(tile = ?self.mover.tile(), from = ?self.mover.direction, to = ?requested, "Player turned");
            self.mover.direction = requested;
            self.mover.snap_cross_axis();
        } else {
            trace!(tile = ?self.mover.tile(), direction = ?requested, "Turn blocked, request dropped");
        }
        self.input_dir = None;
    }

    fn start_power_up(&mut self) {
        self.is_power_up_active = true;
        self.power_up_timer = self.power_up_time;
        debug!(seconds = self.power_up_time, "Power-up started");
    }

    /// Advances the player by `delta` seconds, eating whatever it walks onto.
    ///
    /// The power-up timer counts down before any movement. Returns at most one event; a power-up
    /// starting in the same update that an older one expired wins over the expiry.
    pub fn update(&mut self, delta: f32, maze: &Maze, food: &mut FoodLayer) -> Option<PlayerEvent> {
        let mut event = None;

        if self.is_power_up_active {
            self.power_up_timer -= delta;
            if self.power_up_timer <= 0.0 {
                self.is_power_up_active = false;
                self.power_up_timer = 0.0;
                debug!("Power-up expired");
                event = Some(PlayerEvent::PowerUpEnd);
            }
        }

        if self.stalled {
            self.stalled = false;
            self.is_moving = false;
            return event;
        }

        let mut budget = self.mover.speed * delta;
        loop {
            self.try_buffered_turn(maze);
            if budget <= 0.0 {
                break;
            }

            let before = self.mover.tile();
            let moved = self.mover.advance(budget, maze);
            if moved <= 0.0 {
                self.is_moving = false;
                break;
            }
            self.is_moving = true;
            budget -= moved;

            let tile = self.mover.tile();
            if tile == before {
                continue;
            }
            match food.eat(tile) {
                FoodType::None => {}
                FoodType::Normal => {
                    trace!(tile = ?tile, remaining = food.remaining(), "Pellet eaten");
                    self.stalled = true;
                }
                FoodType::Special => {
                    trace!(tile = ?tile, remaining = food.remaining(), "Power pellet eaten");
                    self.stalled = true;
                    self.start_power_up();
                    event = Some(PlayerEvent::PowerUp);
                }
            }
            // Eating ends movement for this update
            if self.stalled {
                break;
            }
        }

        event
    }
}
