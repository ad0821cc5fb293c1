//! Command-line options shared by the binaries.
//!
//! Every flag can also be set through a `SNAKE_*` environment variable.

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Args;

use crate::core::{GameConfig, RestartMode};
use crate::types::{BASE_TICK_MS, GRID_COLUMNS, GRID_ROWS};

#[derive(Debug, Clone, Args)]
pub struct GameArgs {
    /// End the session when the snake leaves the board instead of wrapping
    #[arg(long, env = "SNAKE_BORDER")]
    pub border: bool,

    /// Starting speed level (0..=2, higher values are clamped)
    #[arg(long, env = "SNAKE_SPEED", default_value_t = 0)]
    pub speed: u8,

    #[arg(long, env = "SNAKE_COLUMNS", default_value_t = GRID_COLUMNS)]
    pub columns: i32,

    #[arg(long, env = "SNAKE_ROWS", default_value_t = GRID_ROWS)]
    pub rows: i32,

    /// RNG seed for a reproducible first session
    #[arg(long, env = "SNAKE_SEED")]
    pub seed: Option<u64>,

    /// What happens after a defeat: `auto` or `hand-off`
    #[arg(long, env = "SNAKE_RESTART", default_value = "hand-off")]
    pub restart: String,

    /// Base turn length in milliseconds at speed x1
    #[arg(long, env = "SNAKE_TICK_MS", default_value_t = BASE_TICK_MS)]
    pub tick_ms: u32,
}

impl GameArgs {
    /// Build and validate the session configuration.
    pub fn to_config(&self) -> Result<GameConfig> {
        let restart = RestartMode::from_str(&self.restart)
            .ok_or_else(|| anyhow!("unknown restart mode '{}' (expected auto or hand-off)", self.restart))?;

        let mut config = GameConfig::default()
            .with_border(self.border)
            .with_starting_speed(self.speed)
            .with_grid(self.columns, self.rows)
            .with_base_interval(Duration::from_millis(self.tick_ms as u64))
            .with_restart_mode(restart);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}
