//! Engine module - the per-turn state machine
//!
//! This module ties together all core components: grid, snake, fruit, clock
//! and RNG. It owns the session lifecycle (`Idle -> Running -> Idle/Running`)
//! and the turn transition executed by [`GameEngine::tick`].

use std::sync::Arc;

use log::{debug, info, trace, warn};

use crate::clock::GameClock;
use crate::config::{GameConfig, RestartMode};
use crate::fruit::{Fruit, FruitPhase, FruitSchedule};
use crate::grid::Grid;
use crate::latch::{DirectionLatch, DirectionSender};
use crate::rng::GameRng;
use crate::snake::Snake;
use crate::snapshot::{DefeatReason, GameSnapshot, TickReport, TurnOutcome};
use crate::types::{Direction, Position};
use crate::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// No session; `tick` is rejected
    Idle,
    Running,
}

#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    schedule: FruitSchedule,
    snake: Snake,
    fruit: Fruit,
    clock: GameClock,
    rng: GameRng,
    latch: Arc<DirectionLatch>,
    state: EngineState,
    score: u32,
    best_score: u32,
    /// Monotonic session id (increments on every start, including auto restarts).
    session_id: u32,
}

impl GameEngine {
    /// Create an idle engine with an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create an idle engine with a fixed RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        let config = GameConfig::default();
        Self {
            grid: config.grid(),
            schedule: config.fruit_schedule(),
            snake: Snake::new(Position::default(), Direction::Right),
            fruit: Fruit::new(),
            clock: GameClock::new(config.base_interval, config.starting_multiplier()),
            rng,
            latch: Arc::new(DirectionLatch::new()),
            state: EngineState::Idle,
            score: 0,
            best_score: 0,
            session_id: 0,
            config,
        }
    }

    /// Start a session with `config`.
    ///
    /// Starting while a session is running abandons it and begins a new one.
    /// A seed in the config reseeds the RNG; otherwise the current RNG stream
    /// carries on.
    pub fn start(&mut self, config: GameConfig) -> Result<GameSnapshot, GameError> {
        config.validate()?;

        if let Some(seed) = config.seed {
            self.rng = GameRng::new(seed);
        }
        self.grid = config.grid();
        self.schedule = config.fruit_schedule();
        self.clock = GameClock::new(config.base_interval, config.starting_multiplier());
        self.snake =
            Snake::with_capacity(Position::default(), Direction::Right, config.tail_capacity);
        self.config = config;

        self.begin_session();
        Ok(self.snapshot())
    }

    fn begin_session(&mut self) {
        self.reset();

        let head = Position::new(
            self.rng.range(self.grid.interior_columns()),
            self.rng.range(self.grid.interior_rows()),
        );
        let direction = self.rng.direction();
        self.snake.set_position(head);
        self.snake.set_direction(direction);

        self.session_id = self.session_id.wrapping_add(1);
        self.state = EngineState::Running;

        info!(
            "session {} started at {} heading {} (border: {}, speed x{:.2}, seed {})",
            self.session_id,
            head,
            direction,
            self.config.border_enabled,
            self.clock.speed_multiplier(),
            self.rng.seed()
        );
    }

    /// Clear snake, fruit, clock and pending input, then go idle.
    ///
    /// Safe to call at any time, any number of times.
    pub fn reset(&mut self) {
        self.snake.reset();
        self.fruit.reset();
        self.clock.reset();
        self.latch.clear();
        self.score = 0;
        self.state = EngineState::Idle;
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn fruit_schedule(&self) -> FruitSchedule {
        self.schedule
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn turn(&self) -> u32 {
        self.clock.turn()
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn fruit(&self) -> &Fruit {
        &self.fruit
    }

    /// The snake of the running session
    pub fn snake(&self) -> Option<&Snake> {
        self.is_running().then_some(&self.snake)
    }

    /// Direct access to the running snake, for scripted setups
    pub fn snake_mut(&mut self) -> Option<&mut Snake> {
        if self.is_running() {
            Some(&mut self.snake)
        } else {
            None
        }
    }

    /// Put a fruit on a chosen cell, outside the regular duty cycle.
    pub fn place_fruit(&mut self, pos: Position) -> Result<(), GameError> {
        if !self.is_running() {
            return Err(GameError::InvalidState);
        }
        self.fruit.spawn(pos, &self.snake)
    }

    /// Handle for submitting directions from another thread or task
    pub fn direction_sender(&self) -> DirectionSender {
        DirectionSender::new(Arc::clone(&self.latch))
    }

    /// Queue a heading for the next turn.
    ///
    /// Only the first accepted command between two ticks counts. Commands that
    /// would reverse the snake or keep its current heading are ignored and do
    /// not use up the turn. Returns whether the command was latched.
    pub fn submit_direction(&self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        let current = self.snake.direction();
        if direction == current || direction.is_opposite(current) {
            return false;
        }
        self.latch.submit(direction)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let running = self.is_running();

        out.snake_head = running.then(|| self.snake.head());
        out.snake_tail.clear();
        if running {
            out.snake_tail.extend(self.snake.tail().iter().copied());
        }
        out.direction = running.then(|| self.snake.direction());
        out.tail_capacity = self.snake.tail_capacity();
        out.fruit = self.fruit.position();
        out.score = self.score;
        out.best_score = self.best_score;
        out.turn = self.clock.turn();
        out.session_id = self.session_id;
        out.running = running;
        out.border_enabled = self.config.border_enabled;
        out.columns = self.grid.columns();
        out.rows = self.grid.rows();
        out.speed_multiplier = self.clock.speed_multiplier();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the session by one turn.
    ///
    /// Returns [`GameError::InvalidState`] without touching anything when no
    /// session is running.
    pub fn tick(&mut self) -> Result<TickReport, GameError> {
        if !self.is_running() {
            return Err(GameError::InvalidState);
        }

        self.apply_pending_direction();
        self.run_fruit_schedule();

        if !self.config.border_enabled {
            self.handle_outbound();
        }

        // The virtual cell outside the board (after outbound handling) is not a tail block.
        let previous = self.snake.move_head();
        if self.grid.in_bounds(previous) {
            self.snake.add_tail_block(previous);
        }

        if let Some(reason) = self.check_defeat() {
            return Ok(self.defeat(reason));
        }

        let ate_fruit = self.try_eat_fruit();
        let turn = self.clock.advance();

        trace!(
            "turn {} head {} tail {} fruit {:?}",
            turn,
            self.snake.head(),
            self.snake.tail().len(),
            self.fruit.position()
        );

        Ok(TickReport {
            snapshot: self.snapshot(),
            outcome: TurnOutcome::Continuing,
            next_interval: self.clock.interval(),
            ate_fruit,
        })
    }

    fn apply_pending_direction(&mut self) {
        let Some(direction) = self.latch.take() else {
            return;
        };
        // Commands from a DirectionSender skip the submit-time filter.
        if direction.is_opposite(self.snake.direction()) {
            debug!("dropping reversal to {}", direction);
            return;
        }
        self.snake.set_direction(direction);
    }

    fn run_fruit_schedule(&mut self) {
        match self.schedule.phase_at(self.clock.turn()) {
            FruitPhase::Spawn => self.spawn_fruit(),
            FruitPhase::Expire => {
                if self.fruit.expire() {
                    debug!("fruit expired on turn {}", self.clock.turn());
                }
            }
            FruitPhase::Hold => {}
        }
    }

    fn spawn_fruit(&mut self) {
        let Some(pos) = self.free_cell() else {
            warn!("no free cell for fruit on turn {}", self.clock.turn());
            return;
        };
        match self.fruit.spawn(pos, &self.snake) {
            Ok(()) => debug!("fruit spawned at {} on turn {}", pos, self.clock.turn()),
            Err(e) => warn!("fruit spawn skipped: {}", e),
        }
    }

    /// Random cell not covered by the snake, resampling until one is found
    fn free_cell(&mut self) -> Option<Position> {
        let occupied = self.snake.tail().len() + 1;
        if occupied >= self.grid.cell_count() {
            return None;
        }
        let columns = 1..=self.grid.columns();
        let rows = 1..=self.grid.rows();
        loop {
            let candidate = Position::new(
                self.rng.range(columns.clone()),
                self.rng.range(rows.clone()),
            );
            if !self.snake.occupies(candidate) {
                return Some(candidate);
            }
        }
    }

    /// Carry the head across the edge when the border is disabled.
    ///
    /// The head cell is kept as a tail block and the head is parked on the
    /// cell just outside the opposite edge, so the regular move lands on the
    /// wrapped cell.
    fn handle_outbound(&mut self) {
        let head = self.snake.head();
        let next = self.snake.next_head();
        if !self.grid.in_bounds(head) || self.grid.in_bounds(next) {
            return;
        }

        self.snake.add_tail_block(head);
        let entry = self.grid.wrap(next);
        let parked = entry.step(self.snake.direction().opposite());
        self.snake.set_position(parked);
        trace!("outbound at {}, re-entering at {}", head, entry);
    }

    fn check_defeat(&self) -> Option<DefeatReason> {
        if self.snake.bites_itself() {
            return Some(DefeatReason::SelfBite);
        }
        if self.config.border_enabled && !self.grid.in_bounds(self.snake.head()) {
            return Some(DefeatReason::OutOfBounds);
        }
        None
    }

    fn defeat(&mut self, reason: DefeatReason) -> TickReport {
        let snapshot = self.snapshot();
        self.best_score = self.best_score.max(self.score);

        info!(
            "session {} lost on turn {} ({}), score {}",
            self.session_id,
            self.clock.turn(),
            reason.as_str(),
            self.score
        );

        self.reset();
        if self.config.restart_mode == RestartMode::Auto {
            self.begin_session();
        }

        TickReport {
            snapshot,
            outcome: TurnOutcome::Defeated(reason),
            next_interval: self.clock.interval(),
            ate_fruit: false,
        }
    }

    fn try_eat_fruit(&mut self) -> bool {
        if self.fruit.position() != Some(self.snake.head()) || !self.fruit.consume() {
            return false;
        }

        self.score += 1;
        self.best_score = self.best_score.max(self.score);
        self.snake.grow();
        self.clock.boost(self.config.speed_boost);

        debug!(
            "fruit eaten at {}, score {}, speed x{:.3}",
            self.snake.head(),
            self.score,
            self.clock.speed_multiplier()
        );
        true
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
