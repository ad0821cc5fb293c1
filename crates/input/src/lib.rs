//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Steering
//! needs no key-repeat handling: one press is one direction command, and the
//! engine keeps only the first one per turn.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
