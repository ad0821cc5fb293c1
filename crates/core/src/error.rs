//! Error types for the simulation core.
//!
//! Defeat is a regular turn outcome and never shows up here.

use thiserror::Error;

use crate::types::Position;

/// Rejected configuration values, reported by [`crate::GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {columns}x{rows}")]
    GridTooSmall { columns: i32, rows: i32, min: i32 },
    #[error("grid must be at most {max}x{max} cells, got {columns}x{rows}")]
    GridTooLarge { columns: i32, rows: i32, max: i32 },
    #[error("tail capacity must be positive")]
    ZeroTailCapacity,
    #[error("fruit {0} must be at least one turn")]
    ZeroFruitTiming(&'static str),
    #[error("fruit cycle of {interval} + {duration} turns does not fit in a turn counter")]
    FruitCycleTooLong { interval: u32, duration: u32 },
    #[error("speed boost must be a finite factor >= 1.0, got {0}")]
    InvalidSpeedBoost(f64),
    #[error("base tick interval must be positive")]
    ZeroBaseInterval,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("no session is running")]
    InvalidState,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cell {0} is occupied by the snake")]
    CellOccupied(Position),
    #[error("a fruit is already on the board")]
    FruitAlreadyActive,
}
