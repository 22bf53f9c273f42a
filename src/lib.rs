//! Grid Snake - simulation core for a wraparound snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wraparound, growth, collisions)
//! - `config`: Field geometry, cadence and seed
//! - `error`: Crate error type
//!
//! Rendering, keyboard mapping and wall-clock scheduling belong to the caller:
//! it feeds commands through a [`sim::DirectionHandle`], calls
//! [`sim::Engine::tick`] every [`GameConfig::tick_interval`], and draws the
//! [`sim::Snapshot`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::GameConfig;
pub use error::{Result, SnakeError};
pub use sim::{Command, Engine, GamePhase, Snapshot};

/// Game configuration defaults
pub mod consts {
    /// Play field size in pixels
    pub const FIELD_WIDTH: i32 = 400;
    pub const FIELD_HEIGHT: i32 = 400;

    /// Grid step; head, tail segments and food are this size
    pub const CELL_SIZE: i32 = 20;

    /// Milliseconds between ticks, also the per-segment tail delay
    pub const TICK_INTERVAL_MS: u64 = 100;
    /// Upper bound on the tick interval (one hour)
    pub const MAX_TICK_INTERVAL_MS: u64 = 60 * 60 * 1000;

    /// Tail cap carried in snake state (growth does not check it)
    pub const MAX_TAIL_SIZE: i32 = 10;

    pub const DEFAULT_SEED: u64 = 0x5eed_5a4e;
}
