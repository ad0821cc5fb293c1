//! Pending direction latch.
//!
//! Holds at most one direction command between two ticks. The first command
//! since the last tick wins; later ones are dropped until the engine takes the
//! latched value. Backed by a single atomic so input can arrive from another
//! thread or task while the owner is ticking.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::types::Direction;

const EMPTY: u8 = 0;

#[derive(Debug, Default)]
pub struct DirectionLatch {
    pending: AtomicU8,
}

impl DirectionLatch {
    pub fn new() -> Self {
        Self {
            pending: AtomicU8::new(EMPTY),
        }
    }

    /// Latch `direction` if nothing is pending. Returns whether it was accepted.
    pub fn submit(&self, direction: Direction) -> bool {
        self.pending
            .compare_exchange(EMPTY, direction.code(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Take the pending direction, leaving the latch empty
    pub fn take(&self) -> Option<Direction> {
        Direction::from_code(self.pending.swap(EMPTY, Ordering::AcqRel))
    }

    pub fn clear(&self) {
        self.pending.store(EMPTY, Ordering::Release);
    }
}

/// Cloneable handle for submitting directions from outside the game loop.
///
/// Obtained from [`crate::GameEngine::direction_sender`]. Reversal filtering
/// happens when the engine consumes the command, so a reversal sent through a
/// handle is dropped at the next tick.
#[derive(Debug, Clone)]
pub struct DirectionSender {
    latch: Arc<DirectionLatch>,
}

impl DirectionSender {
    pub(crate) fn new(latch: Arc<DirectionLatch>) -> Self {
        Self { latch }
    }

    pub fn submit(&self, direction: Direction) -> bool {
        self.latch.submit(direction)
    }
}
