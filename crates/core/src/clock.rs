//! Clock module - turn counter and speed scaling
//!
//! The clock never sleeps. It reports how long the caller should wait before
//! the next tick: `base_interval / speed_multiplier`.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct GameClock {
    turn: u32,
    base_interval: Duration,
    starting_multiplier: f64,
    speed_multiplier: f64,
}

impl GameClock {
    pub fn new(base_interval: Duration, starting_multiplier: f64) -> Self {
        let starting_multiplier = starting_multiplier.max(1.0);
        Self {
            turn: 0,
            base_interval,
            starting_multiplier,
            speed_multiplier: starting_multiplier,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn starting_multiplier(&self) -> f64 {
        self.starting_multiplier
    }

    /// Move to the next turn and return it
    pub fn advance(&mut self) -> u32 {
        self.turn = self.turn.wrapping_add(1);
        self.turn
    }

    /// Wait time until the next tick at the current speed
    pub fn interval(&self) -> Duration {
        self.base_interval.div_f64(self.speed_multiplier)
    }

    /// Speed up by `factor`. Factors below 1.0 are ignored so speed never drops.
    pub fn boost(&mut self, factor: f64) {
        if factor >= 1.0 {
            self.speed_multiplier *= factor;
        }
    }

    pub fn reset(&mut self) {
        self.turn = 0;
        self.speed_multiplier = self.starting_multiplier;
    }
}
