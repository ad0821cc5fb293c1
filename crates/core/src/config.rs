//! Session configuration.
//!
//! A [`GameConfig`] is handed to [`crate::GameEngine::start`] and stays fixed
//! for the whole session.

use std::time::Duration;

use crate::fruit::FruitSchedule;
use crate::grid::Grid;
use crate::types::{
    BASE_TICK_MS, FRUIT_DURATION_TURNS, FRUIT_INTERVAL_TURNS, GRID_COLUMNS, GRID_ROWS,
    INITIAL_TAIL_CAPACITY, MAX_GRID_SIDE, MAX_STARTING_SPEED, MIN_GRID_SIDE, SPEED_BOOST,
    STARTING_SPEED_STEP,
};
use crate::ConfigError;

/// What the engine does after a defeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartMode {
    /// Begin a new session right away
    Auto,
    /// Go idle and wait for the caller to start again
    #[default]
    HandOff,
}

impl RestartMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(RestartMode::Auto),
            "hand-off" | "handoff" => Some(RestartMode::HandOff),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RestartMode::Auto => "auto",
            RestartMode::HandOff => "hand-off",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Leaving the board is fatal when set; otherwise the snake wraps around
    pub border_enabled: bool,
    starting_speed: u8,
    pub columns: i32,
    pub rows: i32,
    /// Tail length of a fresh snake; every reset returns to it
    pub tail_capacity: usize,
    pub fruit_interval: u32,
    pub fruit_duration: u32,
    /// Speed multiplier growth per fruit
    pub speed_boost: f64,
    pub base_interval: Duration,
    pub restart_mode: RestartMode,
    /// RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            border_enabled: false,
            starting_speed: 0,
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            tail_capacity: INITIAL_TAIL_CAPACITY,
            fruit_interval: FRUIT_INTERVAL_TURNS,
            fruit_duration: FRUIT_DURATION_TURNS,
            speed_boost: SPEED_BOOST,
            base_interval: Duration::from_millis(BASE_TICK_MS as u64),
            restart_mode: RestartMode::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border(mut self, enabled: bool) -> Self {
        self.border_enabled = enabled;
        self
    }

    /// Set the starting speed, clamped to `0..=MAX_STARTING_SPEED`
    pub fn with_starting_speed(mut self, speed: u8) -> Self {
        self.starting_speed = speed.min(MAX_STARTING_SPEED);
        self
    }

    pub fn with_grid(mut self, columns: i32, rows: i32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn with_tail_capacity(mut self, capacity: usize) -> Self {
        self.tail_capacity = capacity;
        self
    }

    pub fn with_fruit_timing(mut self, interval: u32, duration: u32) -> Self {
        self.fruit_interval = interval;
        self.fruit_duration = duration;
        self
    }

    pub fn with_speed_boost(mut self, factor: f64) -> Self {
        self.speed_boost = factor;
        self
    }

    pub fn with_base_interval(mut self, interval: Duration) -> Self {
        self.base_interval = interval;
        self
    }

    pub fn with_restart_mode(mut self, mode: RestartMode) -> Self {
        self.restart_mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn starting_speed(&self) -> u8 {
        self.starting_speed
    }

    /// Speed multiplier a session starts with
    pub fn starting_multiplier(&self) -> f64 {
        1.0 + STARTING_SPEED_STEP * self.starting_speed as f64
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.columns, self.rows)
    }

    pub fn fruit_schedule(&self) -> FruitSchedule {
        FruitSchedule::new(self.fruit_interval, self.fruit_duration)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_GRID_SIDE || self.rows < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall {
                columns: self.columns,
                rows: self.rows,
                min: MIN_GRID_SIDE,
            });
        }
        if self.columns > MAX_GRID_SIDE || self.rows > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                columns: self.columns,
                rows: self.rows,
                max: MAX_GRID_SIDE,
            });
        }
        if self.tail_capacity == 0 {
            return Err(ConfigError::ZeroTailCapacity);
        }
        if self.fruit_interval == 0 {
            return Err(ConfigError::ZeroFruitTiming("interval"));
        }
        if self.fruit_duration == 0 {
            return Err(ConfigError::ZeroFruitTiming("duration"));
        }
        if self.fruit_interval.checked_add(self.fruit_duration).is_none() {
            return Err(ConfigError::FruitCycleTooLong {
                interval: self.fruit_interval,
                duration: self.fruit_duration,
            });
        }
        if !self.speed_boost.is_finite() || self.speed_boost < 1.0 {
            return Err(ConfigError::InvalidSpeedBoost(self.speed_boost));
        }
        if self.base_interval.is_zero() {
            return Err(ConfigError::ZeroBaseInterval);
        }
        Ok(())
    }
}
