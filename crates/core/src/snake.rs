//! Snake module - head, heading and the bounded tail
//!
//! The tail is a FIFO of cells the head has left behind, oldest first.
//! Appending past `tail_capacity` evicts the oldest block, which keeps the
//! visible length fixed until a fruit raises the capacity.

use std::collections::VecDeque;

use crate::types::{Direction, Position, INITIAL_TAIL_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    head: Position,
    direction: Direction,
    tail: VecDeque<Position>,
    tail_capacity: usize,
    /// Capacity restored by `reset`
    initial_capacity: usize,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Self::with_capacity(head, direction, INITIAL_TAIL_CAPACITY)
    }

    pub fn with_capacity(head: Position, direction: Direction, capacity: usize) -> Self {
        Self {
            head,
            direction,
            tail: VecDeque::with_capacity(INITIAL_TAIL_CAPACITY + 1),
            tail_capacity: capacity,
            initial_capacity: capacity,
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn tail(&self) -> &VecDeque<Position> {
        &self.tail
    }

    pub fn tail_capacity(&self) -> usize {
        self.tail_capacity
    }

    pub fn set_position(&mut self, pos: Position) {
        self.head = pos;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance the head one cell and return where it was.
    pub fn move_head(&mut self) -> Position {
        let previous = self.head;
        self.head = previous.step(self.direction);
        previous
    }

    /// The cell the head enters on the next move
    pub fn next_head(&self) -> Position {
        self.head.step(self.direction)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.tail.contains(&pos)
    }

    /// Head landed on one of its own tail blocks
    pub fn bites_itself(&self) -> bool {
        self.tail.contains(&self.head)
    }

    pub fn grow(&mut self) {
        self.tail_capacity += 1;
    }

    /// Append a tail block, evicting the oldest when over capacity
    pub fn add_tail_block(&mut self, pos: Position) {
        self.tail.push_back(pos);
        while self.tail.len() > self.tail_capacity {
            self.tail.pop_front();
        }
    }

    pub fn reset(&mut self) {
        self.tail.clear();
        self.tail_capacity = self.initial_capacity;
    }

    #[cfg(test)]
    pub(crate) fn with_tail(
        head: Position,
        direction: Direction,
        tail: &[Position],
        tail_capacity: usize,
    ) -> Self {
        Self {
            head,
            direction,
            tail: tail.iter().copied().collect(),
            tail_capacity,
            initial_capacity: tail_capacity,
        }
    }
}
