//! Grid module - board geometry
//!
//! The grid is a fixed `columns x rows` rectangle of 1-indexed cells.
//! It stores no cell contents: occupancy lives with the snake and the fruit.
//! Coordinates: x ranges 1..=columns (left to right), y ranges 1..=rows
//! (bottom to top).

use std::ops::RangeInclusive;

use crate::types::{Position, GRID_COLUMNS, GRID_ROWS, SPAWN_MARGIN};

/// Board geometry, constant for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    columns: i32,
    rows: i32,
}

impl Grid {
    /// Create a grid. Dimensions are checked by [`crate::GameConfig::validate`].
    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.columns.max(0) as usize) * (self.rows.max(0) as usize)
    }

    /// Check if position is on the board
    pub fn in_bounds(&self, pos: Position) -> bool {
        (1..=self.columns).contains(&pos.x) && (1..=self.rows).contains(&pos.y)
    }

    /// Map any coordinate onto the board, crossing to the opposite edge.
    ///
    /// `0` maps to the last column/row and `columns + 1` maps to `1`.
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: (pos.x - 1).rem_euclid(self.columns) + 1,
            y: (pos.y - 1).rem_euclid(self.rows) + 1,
        }
    }

    /// Columns a fresh snake may spawn in (at least two cells from each edge)
    pub fn interior_columns(&self) -> RangeInclusive<i32> {
        SPAWN_MARGIN..=self.columns - SPAWN_MARGIN
    }

    /// Rows a fresh snake may spawn in (at least two cells from each edge)
    pub fn interior_rows(&self) -> RangeInclusive<i32> {
        SPAWN_MARGIN..=self.rows - SPAWN_MARGIN
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_COLUMNS, GRID_ROWS)
    }
}
