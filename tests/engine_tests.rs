//! Engine tests - turn rules through the public API

use std::time::Duration;

use tui_snake::core::{
    DefeatReason, EngineState, GameConfig, GameEngine, GameError, GameRng, RestartMode,
    TurnOutcome,
};
use tui_snake::types::{Direction, Position, INITIAL_TAIL_CAPACITY};

/// Wrapped board, fixed seed, no scheduled fruit for a long while.
fn quiet() -> GameConfig {
    GameConfig::default()
        .with_border(false)
        .with_seed(777)
        .with_fruit_timing(1000, 10)
}

fn started(config: GameConfig) -> GameEngine {
    let mut engine = GameEngine::with_seed(1);
    engine.start(config).unwrap();
    engine
}

/// Replace the running snake. `tail` is oldest first.
fn script(engine: &mut GameEngine, head: (i32, i32), dir: Direction, tail: &[(i32, i32)]) {
    let snake = engine.snake_mut().expect("session running");
    snake.reset();
    snake.set_position(head.into());
    snake.set_direction(dir);
    for block in tail {
        snake.add_tail_block((*block).into());
    }
}

fn positions(cells: &[(i32, i32)]) -> Vec<Position> {
    cells.iter().copied().map(Position::from).collect()
}

#[test]
fn test_wrap_right_edge_example() {
    let mut engine = started(quiet());
    script(&mut engine, (16, 5), Direction::Right, &[(15, 5), (14, 5), (13, 5)]);

    let report = engine.tick().unwrap();

    assert_eq!(report.outcome, TurnOutcome::Continuing);
    assert_eq!(report.snapshot.snake_head, Some(Position::new(1, 5)));
    assert_eq!(report.snapshot.snake_tail, positions(&[(14, 5), (13, 5), (16, 5)]));
}

#[test]
fn test_wrap_top_edge() {
    let mut engine = started(quiet());
    script(&mut engine, (4, 9), Direction::Up, &[(4, 6), (4, 7), (4, 8)]);

    let report = engine.tick().unwrap();
    assert_eq!(report.outcome, TurnOutcome::Continuing);
    assert_eq!(report.snapshot.snake_head, Some(Position::new(4, 1)));
    assert_eq!(report.snapshot.snake_tail, positions(&[(4, 7), (4, 8), (4, 9)]));

    // Keeps going on the far side.
    let report = engine.tick().unwrap();
    assert_eq!(report.snapshot.snake_head, Some(Position::new(4, 2)));
    assert_eq!(report.snapshot.snake_tail, positions(&[(4, 8), (4, 9), (4, 1)]));
}

#[test]
fn test_wrapped_board_never_ends_at_the_edge() {
    let mut engine = started(quiet());
    script(&mut engine, (8, 5), Direction::Left, &[]);

    for _ in 0..64 {
        let report = engine.tick().unwrap();
        assert_eq!(report.outcome, TurnOutcome::Continuing);
        let head = report.snapshot.snake_head.unwrap();
        assert!((1..=16).contains(&head.x));
        assert_eq!(head.y, 5);
    }
}

#[test]
fn test_border_defeat_hands_off() {
    let mut engine = started(quiet().with_border(true));
    script(&mut engine, (16, 5), Direction::Right, &[(13, 5), (14, 5), (15, 5)]);

    let report = engine.tick().unwrap();

    assert_eq!(report.outcome, TurnOutcome::Defeated(DefeatReason::OutOfBounds));
    // The report shows the board at the moment of death.
    assert_eq!(report.snapshot.snake_head, Some(Position::new(17, 5)));
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(!engine.snapshot().running);
    assert_eq!(engine.tick(), Err(GameError::InvalidState));
}

#[test]
fn test_self_bite() {
    let mut engine = started(quiet());
    script(&mut engine, (5, 5), Direction::Down, &[(6, 5), (6, 4), (5, 4)]);

    let report = engine.tick().unwrap();
    assert_eq!(report.outcome, TurnOutcome::Defeated(DefeatReason::SelfBite));
    assert!(!engine.is_running());
}

#[test]
fn test_auto_restart_after_defeat() {
    let mut engine = started(quiet().with_border(true).with_restart_mode(RestartMode::Auto));
    script(&mut engine, (1, 3), Direction::Left, &[]);

    let report = engine.tick().unwrap();
    assert!(report.outcome.is_defeat());
    assert!(engine.is_running());
    assert_eq!(engine.session_id(), 2);
    assert_eq!(engine.turn(), 0);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_eating_grows_and_speeds_up() {
    let mut engine = started(quiet());
    script(&mut engine, (5, 5), Direction::Right, &[(2, 5), (3, 5), (4, 5)]);
    let before = engine.clock().interval();

    engine.place_fruit(Position::new(6, 5)).unwrap();
    let report = engine.tick().unwrap();

    assert!(report.ate_fruit);
    assert_eq!(report.snapshot.score, 1);
    assert_eq!(report.snapshot.best_score, 1);
    assert_eq!(report.snapshot.tail_capacity, INITIAL_TAIL_CAPACITY + 1);
    assert_eq!(report.snapshot.fruit, None);
    assert!((report.snapshot.speed_multiplier - 1.05).abs() < 1e-9);
    assert!(report.next_interval < before);

    // The extra capacity shows up as a longer tail on the following turns.
    engine.tick().unwrap();
    assert_eq!(engine.snapshot().snake_tail.len(), 4);
}

#[test]
fn test_fruit_follows_duty_cycle() {
    let config = GameConfig::default().with_border(false).with_seed(4242);
    let mut engine = started(config);
    let schedule = engine.fruit_schedule();

    let mut eaten_this_cycle = false;
    for _ in 0..60 {
        let turn = engine.turn();
        let report = engine.tick().unwrap();
        assert_eq!(report.outcome, TurnOutcome::Continuing);

        if turn % schedule.period() == schedule.interval {
            eaten_this_cycle = false;
        }
        eaten_this_cycle |= report.ate_fruit;

        let present = report.snapshot.fruit.is_some();
        if schedule.is_present_at(turn) {
            assert!(present || eaten_this_cycle, "fruit missing on turn {}", turn);
        } else {
            assert!(!present, "fruit present on turn {}", turn);
        }
    }
}

#[test]
fn test_fruit_never_spawns_on_the_snake() {
    let config = GameConfig::default()
        .with_border(false)
        .with_seed(5)
        .with_fruit_timing(1, 1);
    let mut engine = started(config);

    for _ in 0..200 {
        let report = engine.tick().unwrap();
        if let (Some(fruit), false) = (report.snapshot.fruit, report.ate_fruit) {
            assert!(!report.snapshot.is_snake(fruit));
        }
        if !engine.is_running() {
            engine.start(GameConfig::default().with_fruit_timing(1, 1)).unwrap();
        }
    }
}

#[test]
fn test_tail_stays_within_capacity() {
    let config = GameConfig::default()
        .with_seed(99)
        .with_fruit_timing(1, 4)
        .with_restart_mode(RestartMode::Auto);
    let mut engine = started(config);
    let mut rng = GameRng::new(3);

    for _ in 0..2000 {
        engine.submit_direction(rng.direction());
        let report = engine.tick().unwrap();
        let snap = &report.snapshot;
        assert!(snap.snake_tail.len() <= snap.tail_capacity);
        if report.outcome == TurnOutcome::Continuing {
            let head = snap.snake_head.unwrap();
            assert!((1..=snap.columns).contains(&head.x));
            assert!((1..=snap.rows).contains(&head.y));
        }
    }
    assert!(engine.session_id() >= 1);
}

#[test]
fn test_first_direction_per_turn_wins() {
    let mut engine = started(quiet());
    script(&mut engine, (8, 5), Direction::Right, &[]);

    assert!(engine.submit_direction(Direction::Up));
    assert!(!engine.submit_direction(Direction::Down));
    engine.tick().unwrap();
    assert_eq!(engine.snapshot().snake_head, Some(Position::new(8, 6)));
    assert_eq!(engine.snapshot().direction, Some(Direction::Up));
}

#[test]
fn test_reversal_is_ignored() {
    let mut engine = started(quiet());
    script(&mut engine, (8, 5), Direction::Right, &[(6, 5), (7, 5)]);

    assert!(!engine.submit_direction(Direction::Left));
    engine.tick().unwrap();
    assert_eq!(engine.snapshot().snake_head, Some(Position::new(9, 5)));
}

#[test]
fn test_direction_sender_from_another_thread() {
    let mut engine = started(quiet());
    script(&mut engine, (8, 5), Direction::Right, &[]);

    let sender = engine.direction_sender();
    std::thread::spawn(move || sender.submit(Direction::Down))
        .join()
        .unwrap();

    engine.tick().unwrap();
    assert_eq!(engine.snapshot().snake_head, Some(Position::new(8, 4)));
}

#[test]
fn test_restart_restores_initial_state() {
    let config = quiet().with_starting_speed(1);
    let mut engine = started(config.clone());
    script(&mut engine, (5, 5), Direction::Right, &[]);
    engine.place_fruit(Position::new(6, 5)).unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.score(), 1);

    engine.reset();
    engine.reset();
    assert_eq!(engine.state(), EngineState::Idle);

    let snap = engine.start(config).unwrap();
    assert_eq!(snap.tail_capacity, INITIAL_TAIL_CAPACITY);
    assert!(snap.snake_tail.is_empty());
    assert_eq!(snap.score, 0);
    assert_eq!(snap.best_score, 1);
    assert_eq!(snap.turn, 0);
    assert_eq!(snap.fruit, None);
    assert!((snap.speed_multiplier - 1.5).abs() < 1e-9);
}

#[test]
fn test_starting_speed_sets_interval() {
    let engine = started(quiet().with_starting_speed(2));
    assert_eq!(engine.clock().interval(), Duration::from_millis(500));

    let engine = started(quiet().with_starting_speed(9));
    assert!((engine.clock().speed_multiplier() - 2.0).abs() < 1e-9);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut engine = GameEngine::with_seed(1);
    let err = engine.start(GameConfig::default().with_grid(3, 9)).unwrap_err();
    assert!(matches!(err, GameError::Config(_)));
    assert_eq!(engine.state(), EngineState::Idle);
}
