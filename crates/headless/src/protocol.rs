//! Protocol module - JSON frame types for the headless driver
//!
//! Every frame is one line of JSON. All frames carry: type, seq (monotonic
//! per run) and event.

use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, TickReport, TurnOutcome};
use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameType {
    #[serde(rename = "frame")]
    Frame,
}

impl Default for FrameType {
    fn default() -> Self {
        Self::Frame
    }
}

/// What produced the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameEvent {
    /// A session was just started (first start or restart after hand-off)
    Start,
    /// A regular turn
    Tick,
    /// The turn ended the session; the frame shows the board at death
    Defeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl From<Position> for CellPos {
    fn from(pos: Position) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

impl From<CellPos> for Position {
    fn from(cell: CellPos) -> Self {
        Position::new(cell.x, cell.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFrame {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: FrameType,
    pub seq: u64,
    pub event: FrameEvent,
    pub session_id: u32,
    pub turn: u32,
    pub running: bool,
    /// Defeat reason (`self_bite`, `out_of_bounds`) when `event` is `defeat`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub ate_fruit: bool,
    pub head: Option<CellPos>,
    /// Tail blocks, oldest first
    pub tail: Vec<CellPos>,
    pub direction: Option<String>,
    pub fruit: Option<CellPos>,
    pub score: u32,
    pub best_score: u32,
    pub speed_multiplier: f64,
    pub columns: i32,
    pub rows: i32,
    pub border: bool,
    /// Delay the engine asks for before the next tick
    pub next_interval_ms: u64,
}

impl SnapshotFrame {
    /// Frame for a freshly started session
    pub fn started(seq: u64, snapshot: &GameSnapshot, next_interval_ms: u64) -> Self {
        Self::build(seq, FrameEvent::Start, snapshot, None, false, next_interval_ms)
    }

    /// Frame for the result of one tick
    pub fn from_report(seq: u64, report: &TickReport) -> Self {
        let (event, reason) = match report.outcome {
            TurnOutcome::Continuing => (FrameEvent::Tick, None),
            TurnOutcome::Defeated(reason) => (FrameEvent::Defeat, Some(reason.as_str().to_string())),
        };
        Self::build(
            seq,
            event,
            &report.snapshot,
            reason,
            report.ate_fruit,
            report.next_interval.as_millis() as u64,
        )
    }

    fn build(
        seq: u64,
        event: FrameEvent,
        snap: &GameSnapshot,
        reason: Option<String>,
        ate_fruit: bool,
        next_interval_ms: u64,
    ) -> Self {
        Self {
            msg_type: FrameType::Frame,
            seq,
            event,
            session_id: snap.session_id,
            turn: snap.turn,
            running: snap.running,
            reason,
            ate_fruit,
            head: snap.snake_head.map(CellPos::from),
            tail: snap.snake_tail.iter().copied().map(CellPos::from).collect(),
            direction: snap.direction.map(|d| d.as_str().to_string()),
            fruit: snap.fruit.map(CellPos::from),
            score: snap.score,
            best_score: snap.best_score,
            speed_multiplier: snap.speed_multiplier,
            columns: snap.columns,
            rows: snap.rows,
            border: snap.border_enabled,
            next_interval_ms,
        }
    }
}
