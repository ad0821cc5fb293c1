//! Headless Snake driver.
//!
//! Plays with the built-in autopilot and prints one JSON frame per line on
//! stdout. Logs go to stderr (`RUST_LOG=info` for a run summary).

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use log::info;

use tui_snake::cli::GameArgs;
use tui_snake::headless::HeadlessRunner;

#[derive(Parser)]
#[command(name = "snake-headless", about = "Run Snake without a terminal and stream JSON frames")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    /// Number of turns to play
    #[arg(long, env = "SNAKE_TICKS", default_value_t = 200)]
    ticks: u64,

    /// Wait the in-game interval between turns
    #[arg(long, env = "SNAKE_REALTIME")]
    realtime: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = cli.game.to_config()?;

    let mut runner = HeadlessRunner::new(config);
    info!("headless run: {} ticks, seed {}", cli.ticks, runner.engine().seed());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.realtime {
        runner.run_realtime(cli.ticks, &mut out).await?;
    } else {
        runner.run(cli.ticks, &mut out)?;
    }
    Ok(())
}
