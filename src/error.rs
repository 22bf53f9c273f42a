//! Crate error type

use thiserror::Error;

/// Errors raised by the simulation core and its configuration layer.
///
/// Game over is not an error: it is a normal phase of the engine.
#[derive(Debug, Error)]
pub enum SnakeError {
    /// Steering command other than `up`, `down`, `left` or `right`
    #[error("invalid command: {0:?}")]
    InvalidCommand(String),
    /// Configuration value that would break the grid invariants
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SnakeError> = std::result::Result<T, E>;
