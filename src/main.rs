//! Terminal Snake runner (default binary).
//!
//! This is the interactive entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer, and schedules each turn with the interval the
//! engine reports.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_snake::cli::GameArgs;
use tui_snake::core::{GameConfig, GameEngine, GameSnapshot, TurnOutcome};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_snake::types::GameAction;

/// Input poll period while no session is running
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "tui-snake", about = "Turn-based Snake in the terminal")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = cli.game.to_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut engine = match config.seed {
        Some(seed) => GameEngine::with_seed(seed),
        None => GameEngine::new(),
    };
    let mut snapshot = engine.start(config.clone())?;

    // Restarts continue the RNG stream instead of replaying the seeded board.
    let mut restart_config = config;
    restart_config.seed = None;

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut next_tick = Instant::now() + engine.clock().interval();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = if engine.is_running() {
            next_tick.saturating_duration_since(Instant::now())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit with best score {}", engine.best_score());
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Turn(direction)) => {
                            engine.submit_direction(direction);
                        }
                        Some(GameAction::Restart) => {
                            snapshot = engine.start(restart_config.clone())?;
                            next_tick = Instant::now() + engine.clock().interval();
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if engine.is_running() && Instant::now() >= next_tick {
            let report = engine.tick()?;
            next_tick = Instant::now() + report.next_interval;
            snapshot = show_after_tick(&engine, report.snapshot, report.outcome);
        }
    }
}

/// After a hand-off defeat keep the dead board on screen, marked as over.
/// After an auto restart show the fresh session instead.
fn show_after_tick(engine: &GameEngine, snapshot: GameSnapshot, outcome: TurnOutcome) -> GameSnapshot {
    match outcome {
        TurnOutcome::Continuing => snapshot,
        TurnOutcome::Defeated(_) if engine.is_running() => engine.snapshot(),
        TurnOutcome::Defeated(_) => GameSnapshot {
            running: false,
            ..snapshot
        },
    }
}
