//! Headless game loop.
//!
//! Drives a [`GameEngine`] without a terminal: the autopilot picks a heading,
//! the engine ticks, and every result is written as one JSON line. After a
//! hand-off defeat the runner starts the next session itself, which is what a
//! presentation layer would do.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::autopilot::{Autopilot, Strategy};
use crate::core::{GameConfig, GameEngine, TurnOutcome};
use crate::protocol::SnapshotFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub sessions: u32,
    pub defeats: u32,
    pub fruits_eaten: u32,
    pub best_score: u32,
}

pub struct HeadlessRunner {
    engine: GameEngine,
    autopilot: Autopilot,
    config: GameConfig,
    seq: u64,
    summary: RunSummary,
}

impl HeadlessRunner {
    /// Build a runner for `config`. The autopilot is seeded from the config
    /// seed so a seeded run replays exactly.
    pub fn new(config: GameConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => GameEngine::with_seed(seed),
            None => GameEngine::new(),
        };
        let autopilot = Autopilot::new(engine.seed().rotate_left(17));
        Self {
            engine,
            autopilot,
            config,
            seq: 0,
            summary: RunSummary::default(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Mutable engine access, for scripted setups
    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Produce the next frame: a start frame when no session is running,
    /// otherwise the result of one tick.
    pub fn step(&mut self) -> Result<SnapshotFrame> {
        self.seq += 1;

        if !self.engine.is_running() {
            let snapshot = self.engine.start(self.next_config())?;
            self.summary.sessions += 1;
            let interval = self.engine.clock().interval().as_millis() as u64;
            return Ok(SnapshotFrame::started(self.seq, &snapshot, interval));
        }

        let session = self.engine.session_id();
        if let Some(dir) = self.autopilot.choose(&self.engine.snapshot()) {
            self.engine.submit_direction(dir);
        }

        let report = self.engine.tick()?;
        self.summary.ticks += 1;
        self.summary.best_score = self.engine.best_score();
        if report.ate_fruit {
            self.summary.fruits_eaten += 1;
        }
        if let TurnOutcome::Defeated(reason) = report.outcome {
            self.summary.defeats += 1;
            debug!("session {} ended: {}", session, reason.as_str());
            if self.engine.session_id() != session {
                // Auto restart already began the next session.
                self.summary.sessions += 1;
            }
        }

        Ok(SnapshotFrame::from_report(self.seq, &report))
    }

    /// The seed only applies to the first session; later sessions continue
    /// the engine's RNG stream instead of replaying the same board.
    fn next_config(&self) -> GameConfig {
        let mut config = self.config.clone();
        if self.summary.sessions > 0 {
            config.seed = None;
        }
        config
    }

    /// Run `ticks` turns back to back, writing one JSON line per frame.
    pub fn run<W: Write>(&mut self, ticks: u64, out: &mut W) -> Result<RunSummary> {
        while self.summary.ticks < ticks {
            let frame = self.step()?;
            write_frame(out, &frame)?;
        }
        out.flush()?;
        self.log_summary();
        Ok(self.summary)
    }

    /// Like [`HeadlessRunner::run`], but waits the engine-reported interval
    /// between frames.
    pub async fn run_realtime<W: Write>(&mut self, ticks: u64, out: &mut W) -> Result<RunSummary> {
        while self.summary.ticks < ticks {
            let frame = self.step()?;
            write_frame(out, &frame)?;
            out.flush()?;
            tokio::time::sleep(Duration::from_millis(frame.next_interval_ms)).await;
        }
        self.log_summary();
        Ok(self.summary)
    }

    fn log_summary(&self) {
        let s = self.summary;
        info!(
            "headless run done: {} ticks, {} sessions, {} defeats, {} fruits, best {}",
            s.ticks, s.sessions, s.defeats, s.fruits_eaten, s.best_score
        );
    }
}

fn write_frame<W: Write>(out: &mut W, frame: &SnapshotFrame) -> Result<()> {
    serde_json::to_writer(&mut *out, frame)?;
    out.write_all(b"\n")?;
    Ok(())
}
