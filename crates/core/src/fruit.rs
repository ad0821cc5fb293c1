//! Fruit module - the single food cell and its duty cycle
//!
//! A fruit is either on the board or not. Timing follows a fixed duty cycle:
//! the board is empty for `interval` turns, then a fruit is present for
//! `duration` turns, repeating with period `interval + duration`. A fruit that
//! is eaten early leaves the board empty until the next spawn turn.

use crate::snake::Snake;
use crate::types::{Position, FRUIT_DURATION_TURNS, FRUIT_INTERVAL_TURNS};
use crate::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fruit {
    position: Option<Position>,
}

impl Fruit {
    pub fn new() -> Self {
        Self { position: None }
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// Position while active
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Put the fruit on the board.
    ///
    /// Picking a free cell is the caller's job; occupied cells are rejected.
    pub fn spawn(&mut self, pos: Position, snake: &Snake) -> Result<(), GameError> {
        if self.is_active() {
            return Err(GameError::FruitAlreadyActive);
        }
        if snake.occupies(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        self.position = Some(pos);
        Ok(())
    }

    /// Eat the fruit. Returns false if there was nothing to eat.
    pub fn consume(&mut self) -> bool {
        self.position.take().is_some()
    }

    /// Remove the fruit without scoring. Returns false if it was not active.
    pub fn expire(&mut self) -> bool {
        self.position.take().is_some()
    }

    pub fn reset(&mut self) {
        self.position = None;
    }
}

/// What the duty cycle asks for on a given turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitPhase {
    /// A fruit appears this turn
    Spawn,
    /// The current fruit (if any) leaves this turn
    Expire,
    /// Nothing changes
    Hold,
}

/// Fruit duty cycle: `interval` turns absent, `duration` turns present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FruitSchedule {
    pub interval: u32,
    pub duration: u32,
}

impl FruitSchedule {
    pub const fn new(interval: u32, duration: u32) -> Self {
        Self { interval, duration }
    }

    /// Length of one absent + present cycle, saturating at `u32::MAX`
    pub fn period(&self) -> u32 {
        self.interval.saturating_add(self.duration)
    }

    pub fn phase_at(&self, turn: u32) -> FruitPhase {
        let period = self.period();
        if period == 0 {
            return FruitPhase::Hold;
        }
        let offset = turn % period;
        if offset == self.interval {
            FruitPhase::Spawn
        } else if offset == 0 && turn > 0 {
            FruitPhase::Expire
        } else {
            FruitPhase::Hold
        }
    }

    /// Whether an uneaten fruit is on the board during `turn`
    pub fn is_present_at(&self, turn: u32) -> bool {
        let period = self.period();
        period != 0 && turn % period >= self.interval
    }
}

impl Default for FruitSchedule {
    fn default() -> Self {
        Self::new(FRUIT_INTERVAL_TURNS, FRUIT_DURATION_TURNS)
    }
}
