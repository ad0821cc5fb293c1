//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, headless drivers).
//!
//! # Coordinates
//!
//! Board cells are 1-indexed:
//!
//! - **x**: 1..=columns (left to right)
//! - **y**: 1..=rows (bottom to top, `Up` increases y)
//!
//! The values `0` and `columns + 1` / `rows + 1` only appear transiently while
//! the engine carries the head across a wrapped edge.
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_COLUMNS` | 16 | Default board width |
//! | `GRID_ROWS` | 9 | Default board height |
//! | `MAX_GRID_SIDE` | 256 | Largest accepted board side |
//! | `INITIAL_TAIL_CAPACITY` | 3 | Tail length of a fresh snake |
//! | `FRUIT_INTERVAL_TURNS` | 3 | Turns without fruit per cycle |
//! | `FRUIT_DURATION_TURNS` | 10 | Turns with fruit per cycle |
//! | `BASE_TICK_MS` | 1000 | Turn interval at multiplier 1.0 |
//! | `SPEED_BOOST` | 1.05 | Multiplier growth per fruit eaten |
//! | `MAX_STARTING_SPEED` | 2 | Highest selectable starting speed |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position};
//!
//! let pos = Position::new(4, 4);
//! assert_eq!(pos.step(Direction::Up), Position::new(4, 5));
//! assert_eq!(pos.step(Direction::Left), Position::new(3, 4));
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::from_str("right"), Some(Direction::Right));
//! ```

use std::fmt;

/// Default board width in cells
pub const GRID_COLUMNS: i32 = 16;

/// Default board height in cells
pub const GRID_ROWS: i32 = 9;

/// Smallest board side that still leaves an interior spawn window
pub const MIN_GRID_SIDE: i32 = 4;

/// Largest board side a session accepts
pub const MAX_GRID_SIDE: i32 = 256;

/// Distance from every edge the snake spawns at
pub const SPAWN_MARGIN: i32 = 2;

/// Tail capacity of a fresh snake
pub const INITIAL_TAIL_CAPACITY: usize = 3;

/// Number of turns the board stays without fruit in each cycle
pub const FRUIT_INTERVAL_TURNS: u32 = 3;

/// Number of turns a fruit stays on the board in each cycle
pub const FRUIT_DURATION_TURNS: u32 = 10;

/// Turn interval at speed multiplier 1.0 (milliseconds)
pub const BASE_TICK_MS: u32 = 1000;

/// Speed multiplier growth per fruit eaten
pub const SPEED_BOOST: f64 = 1.05;

/// Highest selectable starting speed
pub const MAX_STARTING_SPEED: u8 = 2;

/// Starting multiplier gained per starting speed step
pub const STARTING_SPEED_STEP: f64 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_and_timing() {
        assert_eq!(GRID_COLUMNS, 16);
        assert_eq!(GRID_ROWS, 9);
        assert_eq!(INITIAL_TAIL_CAPACITY, 3);
        assert_eq!(FRUIT_INTERVAL_TURNS, 3);
        assert_eq!(FRUIT_DURATION_TURNS, 10);
        assert!(SPEED_BOOST > 1.0);
        assert!(MIN_GRID_SIDE >= 2 * SPAWN_MARGIN);
        assert!(MAX_GRID_SIDE > GRID_COLUMNS.max(GRID_ROWS));
    }

    #[test]
    fn step_changes_exactly_one_coordinate() {
        let origin = Position::new(5, 5);
        for dir in Direction::ALL {
            let next = origin.step(dir);
            let dx = (next.x - origin.x).abs();
            let dy = (next.y - origin.y).abs();
            assert_eq!(dx + dy, 1, "{dir} moved more than one cell");
            assert_eq!(next.step(dir.opposite()), origin);
        }
    }

    #[test]
    fn direction_parsing_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn direction_codes_are_non_zero() {
        for dir in Direction::ALL {
            assert_ne!(dir.code(), 0);
            assert_eq!(Direction::from_code(dir.code()), Some(dir));
        }
        assert_eq!(Direction::from_code(0), None);
    }
}

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `direction`
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Movement direction of the snake head
///
/// - **Up**: y + 1
/// - **Down**: y - 1
/// - **Left**: x - 1
/// - **Right**: x + 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Coordinate delta for one step
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Compact non-zero encoding, `0` is reserved for "no direction"
    pub const fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Direction::Up),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            4 => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        })
    }
}

/// Player actions fed into the game loop
///
/// Produced by the terminal key map and by scripted drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next turn
    Turn(Direction),
    /// Start a new session (after a hand-off or at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Turn)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
