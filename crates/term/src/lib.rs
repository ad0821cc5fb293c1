//! Terminal "game renderer" module.
//!
//! Draws the board into a simple framebuffer of character cells and flushes
//! it to the terminal with crossterm. No widget toolkit is involved.
//!
//! - [`board_view`] is pure and unit-tested
//! - [`renderer`] owns the terminal (raw mode, alternate screen, row diffing)

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, FrameBuffer, Tone};
pub use renderer::{changed_rows, encode_diff_into, encode_full_into, TerminalRenderer};
