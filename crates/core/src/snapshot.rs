//! Renderable state emitted by the engine.

use std::time::Duration;

use crate::types::{Direction, Position};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefeatReason {
    /// The head moved onto a tail block
    SelfBite,
    /// The head left the board while the border was enabled
    OutOfBounds,
}

impl DefeatReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefeatReason::SelfBite => "self_bite",
            DefeatReason::OutOfBounds => "out_of_bounds",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    Continuing,
    Defeated(DefeatReason),
}

impl TurnOutcome {
    pub fn is_defeat(&self) -> bool {
        matches!(self, TurnOutcome::Defeated(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    /// `None` while no snake is on the board
    pub snake_head: Option<Position>,
    /// Tail blocks, oldest first
    pub snake_tail: Vec<Position>,
    pub direction: Option<Direction>,
    pub tail_capacity: usize,
    pub fruit: Option<Position>,
    pub score: u32,
    /// Best score since the engine was created (not persisted)
    pub best_score: u32,
    pub turn: u32,
    pub session_id: u32,
    pub running: bool,
    pub border_enabled: bool,
    pub columns: i32,
    pub rows: i32,
    pub speed_multiplier: f64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake_head = None;
        self.snake_tail.clear();
        self.direction = None;
        self.tail_capacity = 0;
        self.fruit = None;
        self.score = 0;
        self.best_score = 0;
        self.turn = 0;
        self.session_id = 0;
        self.running = false;
        self.border_enabled = false;
        self.columns = 0;
        self.rows = 0;
        self.speed_multiplier = 0.0;
    }

    /// Whether `pos` is covered by the snake
    pub fn is_snake(&self, pos: Position) -> bool {
        self.snake_head == Some(pos) || self.snake_tail.contains(&pos)
    }
}

/// Result of one [`crate::GameEngine::tick`]
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// State after the turn. On defeat this is the board as it was when the
    /// snake died, before the session was reset.
    pub snapshot: GameSnapshot,
    pub outcome: TurnOutcome,
    /// Delay before the caller should tick again
    pub next_interval: Duration,
    /// Whether a fruit was eaten this turn
    pub ate_fruit: bool,
}
