//! Headless driver - runs the snake core without a terminal
//!
//! The driver plays the game with a seeded [`autopilot::Autopilot`] and emits
//! one JSON object per line for every frame. It is used for soak runs,
//! replays and as input for external tooling.
//!
//! # Frame Stream
//!
//! 1. A `start` frame when a session begins (including restarts after a hand-off)
//! 2. One `tick` frame per turn
//! 3. A `defeat` frame for the turn that ended a session, showing the board at death
//!
//! ```text
//! {"type":"frame","seq":1,"event":"start","session_id":1,"turn":0,"running":true,...}
//! {"type":"frame","seq":2,"event":"tick","session_id":1,"turn":1,"running":true,...}
//! ```
//!
//! # Pacing
//!
//! [`HeadlessRunner::run`] ticks back to back. [`HeadlessRunner::run_realtime`]
//! sleeps on the tokio timer for the interval the engine reports after each
//! turn, so the stream follows the in-game speed.

pub mod autopilot;
pub mod protocol;
pub mod runner;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use autopilot::{Autopilot, Strategy};
pub use protocol::{CellPos, FrameEvent, FrameType, SnapshotFrame};
pub use runner::{HeadlessRunner, RunSummary};
