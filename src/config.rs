//! Gameplay tunables.
//!
//! Defaults mirror [`crate::constants`]; hosts and tests override individual fields.

use crate::constants::{
    AMBUSH_TILES_AHEAD, COLLISION_RANGE_PX, FLANK_TILES_AHEAD, GHOST_EATEN_SPEED, GHOST_FRIGHTENED_SPEED,
    GHOST_HOUSE_SPEED, GHOST_SPEED, MAX_TICK_DELTA, MODE_SCHEDULE, PLAYER_SPEED, POWER_UP_TIME, RELEASE_DELAYS,
    WANDER_RADIUS_TILES,
};
use crate::error::ConfigError;

/// Every knob the simulation reads.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Player speed, in pixels per second.
    pub player_speed: f32,
    /// Pursuer speed while scattering or chasing.
    pub ghost_speed: f32,
    pub ghost_frightened_speed: f32,
    pub ghost_eaten_speed: f32,
    /// Speed used for bobbing inside and walking out of the house.
    pub ghost_house_speed: f32,
    /// Seconds a power-up lasts.
    pub power_up_time: f32,
    /// Axis-aligned pixel distance under which the player and a pursuer collide.
    pub collision_range: f32,
    /// Largest delta a single tick accepts.
    pub max_tick_delta: f32,
    /// Seconds each pursuer waits in the house, indexed by role.
    pub release_delays: [f32; 4],
    /// Scatter/chase durations. Even indices scatter, odd indices chase.
    pub mode_schedule: Vec<f32>,
    pub ambush_tiles_ahead: i32,
    pub flank_tiles_ahead: i32,
    pub wander_radius_tiles: f32,
    /// Seed for frightened wandering. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            ghost_speed: GHOST_SPEED,
            ghost_frightened_speed: GHOST_FRIGHTENED_SPEED,
            ghost_eaten_speed: GHOST_EATEN_SPEED,
            ghost_house_speed: GHOST_HOUSE_SPEED,
            power_up_time: POWER_UP_TIME,
            collision_range: COLLISION_RANGE_PX,
            max_tick_delta: MAX_TICK_DELTA,
            release_delays: RELEASE_DELAYS,
            mode_schedule: MODE_SCHEDULE.to_vec(),
            ambush_tiles_ahead: AMBUSH_TILES_AHEAD,
            flank_tiles_ahead: FLANK_TILES_AHEAD,
            wander_radius_tiles: WANDER_RADIUS_TILES,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_release_delays(mut self, delays: [f32; 4]) -> Self {
        self.release_delays = delays;
        self
    }

    pub fn with_mode_schedule(mut self, schedule: impl Into<Vec<f32>>) -> Self {
        self.mode_schedule = schedule.into();
        self
    }

    pub fn with_power_up_time(mut self, seconds: f32) -> Self {
        self.power_up_time = seconds;
        self
    }

    /// Rejects values that cannot produce a sane game.
    ///
    /// Speeds, timers and ranges must be positive and finite. Release delays and all but the last
    /// mode duration may be zero; a zero-length mode window is skipped. The last mode duration must
    /// be positive and may be infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("ghost_speed", self.ghost_speed),
            ("ghost_frightened_speed", self.ghost_frightened_speed),
            ("ghost_eaten_speed", self.ghost_eaten_speed),
            ("ghost_house_speed", self.ghost_house_speed),
            ("power_up_time", self.power_up_time),
            ("collision_range", self.collision_range),
            ("max_tick_delta", self.max_tick_delta),
            ("wander_radius_tiles", self.wander_radius_tiles),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for value in self.release_delays {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative {
                    name: "release_delays",
                    value,
                });
            }
        }

        let Some((last, rest)) = self.mode_schedule.split_last() else {
            return Err(ConfigError::EmptySchedule);
        };
        if let Some(&value) = rest.iter().find(|d| !(d.is_finite() && **d >= 0.0)) {
            return Err(ConfigError::Negative {
                name: "mode_schedule",
                value,
            });
        }
        if !(*last > 0.0) {
            return Err(ConfigError::NotPositive {
                name: "mode_schedule",
                value: *last,
            });
        }

        Ok(())
    }
}
