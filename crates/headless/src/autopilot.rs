//! Autopilot - a small steering strategy so headless runs actually play.
//!
//! The autopilot only reads the [`GameSnapshot`]; it never touches the engine.

use crate::core::{GameRng, GameSnapshot, Grid};
use crate::types::{Direction, Position};

pub trait Strategy {
    /// Heading to submit before the next tick, or `None` to keep going straight.
    fn choose(&mut self, snap: &GameSnapshot) -> Option<Direction>;
}

/// Greedy fruit chaser that avoids its own tail and, with the border enabled,
/// the edges. Ties are broken by a seeded RNG so runs replay exactly.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: GameRng,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Headings that survive the next move
    pub fn safe_moves(snap: &GameSnapshot) -> Vec<Direction> {
        let (Some(head), Some(current)) = (snap.snake_head, snap.direction) else {
            return Vec::new();
        };
        let grid = Grid::new(snap.columns, snap.rows);

        // The oldest block leaves the board on this move when the tail is full.
        let skip = usize::from(snap.snake_tail.len() >= snap.tail_capacity);
        let blocked = &snap.snake_tail[skip.min(snap.snake_tail.len())..];

        Direction::ALL
            .iter()
            .copied()
            .filter(|d| !d.is_opposite(current))
            .filter(|d| {
                let next = head.step(*d);
                let landing = if grid.in_bounds(next) {
                    next
                } else if snap.border_enabled {
                    return false;
                } else {
                    grid.wrap(next)
                };
                !blocked.contains(&landing)
            })
            .collect()
    }

    fn distance(snap: &GameSnapshot, from: Position, to: Position) -> i32 {
        let dx = (from.x - to.x).abs();
        let dy = (from.y - to.y).abs();
        if snap.border_enabled {
            dx + dy
        } else {
            dx.min(snap.columns - dx) + dy.min(snap.rows - dy)
        }
    }
}

impl Strategy for Autopilot {
    fn choose(&mut self, snap: &GameSnapshot) -> Option<Direction> {
        let head = snap.snake_head?;
        let current = snap.direction?;
        let moves = Self::safe_moves(snap);
        if moves.is_empty() {
            return None;
        }

        let grid = Grid::new(snap.columns, snap.rows);
        let candidates: Vec<Direction> = match snap.fruit {
            Some(fruit) => {
                let dist = |d: &Direction| Self::distance(snap, grid.wrap(head.step(*d)), fruit);
                let best = moves.iter().map(dist).min()?;
                moves.iter().copied().filter(|d| dist(d) == best).collect()
            }
            None => moves,
        };

        let pick = if candidates.contains(&current) {
            current
        } else {
            candidates[self.rng.range(0..=candidates.len() as i32 - 1) as usize]
        };

        (pick != current).then_some(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(head: (i32, i32), dir: Direction, tail: &[(i32, i32)]) -> GameSnapshot {
        GameSnapshot {
            snake_head: Some(head.into()),
            snake_tail: tail.iter().copied().map(Position::from).collect(),
            direction: Some(dir),
            tail_capacity: 3,
            running: true,
            columns: 16,
            rows: 9,
            speed_multiplier: 1.0,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_never_reverses() {
        let s = snap((5, 5), Direction::Right, &[(2, 5), (3, 5), (4, 5)]);
        let moves = Autopilot::safe_moves(&s);
        assert!(!moves.contains(&Direction::Left));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_avoids_edges_with_border() {
        let mut s = snap((16, 5), Direction::Right, &[(13, 5), (14, 5), (15, 5)]);
        s.border_enabled = true;
        let moves = Autopilot::safe_moves(&s);
        assert!(!moves.contains(&Direction::Right));

        s.border_enabled = false;
        assert!(Autopilot::safe_moves(&s).contains(&Direction::Right));
    }

    #[test]
    fn test_avoids_own_tail() {
        // Head at (5,5) heading Up; (6,5) is a recent block, (4,5) the oldest.
        let s = snap((5, 5), Direction::Up, &[(4, 5), (4, 4), (5, 4)]);
        let mut with_block = s.clone();
        with_block.snake_tail = vec![(7, 7).into(), (6, 5).into(), (5, 4).into()];
        let moves = Autopilot::safe_moves(&with_block);
        assert!(!moves.contains(&Direction::Right));

        // The oldest block is evicted on this move, so stepping there is fine.
        assert!(Autopilot::safe_moves(&s).contains(&Direction::Left));
    }

    #[test]
    fn test_steers_toward_fruit() {
        let mut s = snap((5, 5), Direction::Right, &[(2, 5), (3, 5), (4, 5)]);
        s.fruit = Some(Position::new(5, 8));
        let mut pilot = Autopilot::new(1);
        assert_eq!(pilot.choose(&s), Some(Direction::Up));
    }

    #[test]
    fn test_keeps_heading_without_fruit() {
        let s = snap((5, 5), Direction::Right, &[(2, 5), (3, 5), (4, 5)]);
        let mut pilot = Autopilot::new(1);
        assert_eq!(pilot.choose(&s), None);
    }

    #[test]
    fn test_idle_snapshot_yields_nothing() {
        let mut pilot = Autopilot::new(1);
        assert_eq!(pilot.choose(&GameSnapshot::default()), None);
    }
}
