//! Grid tests - board geometry and direction arithmetic

use tui_snake::core::Grid;
use tui_snake::types::{Direction, Position, GRID_COLUMNS, GRID_ROWS};

#[test]
fn test_default_grid_size() {
    let grid = Grid::default();
    assert_eq!(grid.columns(), GRID_COLUMNS);
    assert_eq!(grid.rows(), GRID_ROWS);
    assert_eq!(grid.cell_count(), 144);
}

#[test]
fn test_in_bounds_is_one_indexed() {
    let grid = Grid::default();
    assert!(grid.in_bounds(Position::new(1, 1)));
    assert!(grid.in_bounds(Position::new(16, 9)));
    assert!(!grid.in_bounds(Position::new(0, 5)));
    assert!(!grid.in_bounds(Position::new(17, 5)));
    assert!(!grid.in_bounds(Position::new(5, 0)));
    assert!(!grid.in_bounds(Position::new(5, 10)));
}

#[test]
fn test_wrap_maps_to_opposite_edge() {
    let grid = Grid::default();
    assert_eq!(grid.wrap(Position::new(17, 5)), Position::new(1, 5));
    assert_eq!(grid.wrap(Position::new(0, 5)), Position::new(16, 5));
    assert_eq!(grid.wrap(Position::new(3, 10)), Position::new(3, 1));
    assert_eq!(grid.wrap(Position::new(3, 0)), Position::new(3, 9));
    // On-board cells are untouched.
    for y in 1..=GRID_ROWS {
        for x in 1..=GRID_COLUMNS {
            let pos = Position::new(x, y);
            assert_eq!(grid.wrap(pos), pos);
        }
    }
}

#[test]
fn test_spawn_window_keeps_two_cells_from_edges() {
    let grid = Grid::default();
    assert_eq!(grid.interior_columns(), 2..=14);
    assert_eq!(grid.interior_rows(), 2..=7);

    let small = Grid::new(4, 4);
    assert_eq!(small.interior_columns(), 2..=2);
    assert_eq!(small.interior_rows(), 2..=2);
}

#[test]
fn test_step_changes_one_coordinate() {
    let origin = Position::new(5, 5);
    for dir in Direction::ALL {
        let next = origin.step(dir);
        let dx = (next.x - origin.x).abs();
        let dy = (next.y - origin.y).abs();
        assert_eq!(dx + dy, 1, "{} should move exactly one cell", dir);
        assert_eq!(next.step(dir.opposite()), origin);
    }
    assert_eq!(origin.step(Direction::Up), Position::new(5, 6));
    assert_eq!(origin.step(Direction::Right), Position::new(6, 5));
}
