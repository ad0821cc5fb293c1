//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: board geometry, bounds and wrap-around
//! - [`snake`]: head, heading and the bounded tail
//! - [`fruit`]: the single fruit and its duty cycle
//! - [`clock`]: turn counter and speed scaling
//! - [`config`]: per-session configuration
//! - [`engine`]: the per-turn state machine
//! - [`latch`]: first-wins pending direction shared with input sources
//! - [`rng`]: seeded randomness for placement
//! - [`snapshot`]: renderable state and tick reports
//!
//! # Game Rules
//!
//! - **Movement**: one cell per turn; `Up` increases y, `Right` increases x
//! - **Tail**: fixed length (3 at start), one block longer per fruit
//! - **Border**: when enabled, leaving the board ends the session; otherwise the snake wraps
//! - **Self-bite**: moving onto a tail block ends the session
//! - **Fruit**: absent for 3 turns, present for 10, repeating
//! - **Speed**: every fruit multiplies the speed by 1.05
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameEngine, TurnOutcome};
//! use tui_snake_types::Direction;
//!
//! // Create and start a session
//! let mut engine = GameEngine::with_seed(12345);
//! let snapshot = engine.start(GameConfig::default()).unwrap();
//! assert_eq!(snapshot.turn, 0);
//!
//! // Steer and advance one turn
//! engine.submit_direction(Direction::Up);
//! let report = engine.tick().unwrap();
//!
//! assert_eq!(report.outcome, TurnOutcome::Continuing);
//! assert_eq!(report.snapshot.turn, 1);
//! assert!(report.next_interval.as_millis() > 0);
//! ```
//!
//! # Timing
//!
//! The engine never sleeps. Every [`TickReport`] carries `next_interval`, the
//! delay the caller should wait before the next [`GameEngine::tick`]. Headless
//! callers can ignore it and tick back to back.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod latch;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use clock::GameClock;
pub use config::{GameConfig, RestartMode};
pub use engine::{EngineState, GameEngine};
pub use error::{ConfigError, GameError};
pub use fruit::{Fruit, FruitPhase, FruitSchedule};
pub use grid::Grid;
pub use latch::{DirectionLatch, DirectionSender};
pub use rng::GameRng;
pub use snake::Snake;
pub use snapshot::{DefeatReason, GameSnapshot, TickReport, TurnOutcome};
