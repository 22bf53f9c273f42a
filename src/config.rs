//! Game configuration
//!
//! All values have defaults from [`crate::consts`]; a JSON document may
//! override any subset of them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SnakeError};

/// Field geometry, cadence and seed for one engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play field width in pixels
    pub field_width: i32,
    /// Play field height in pixels
    pub field_height: i32,
    /// Side of one grid cell (head, tail segment and food size)
    pub cell_size: i32,
    /// Per-tick step of the head on the committed axis; always one cell
    pub velocity: i32,
    /// Tail cap carried in state; growth does not check it
    pub max_tail_size: i32,
    /// Time between ticks, and the per-segment stagger unit
    pub tick_interval_ms: u64,
    /// Seed for food placement
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            cell_size: CELL_SIZE,
            velocity: CELL_SIZE,
            max_tail_size: MAX_TAIL_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Default configuration with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check the values the grid invariants depend on
    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            return Err(SnakeError::InvalidConfig("cell_size must be positive"));
        }
        if self.field_width <= self.cell_size || self.field_height <= self.cell_size {
            return Err(SnakeError::InvalidConfig(
                "field must be larger than one cell on both axes",
            ));
        }
        if self.field_width % self.cell_size != 0 || self.field_height % self.cell_size != 0 {
            return Err(SnakeError::InvalidConfig(
                "field dimensions must be whole multiples of cell_size",
            ));
        }
        if self.velocity != self.cell_size {
            return Err(SnakeError::InvalidConfig("velocity must equal cell_size"));
        }
        if self.tick_interval_ms == 0 {
            return Err(SnakeError::InvalidConfig("tick_interval_ms must be non-zero"));
        }
        if self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(SnakeError::InvalidConfig(
                "tick_interval_ms must not exceed one hour",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
