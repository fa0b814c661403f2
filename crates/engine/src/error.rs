//! Construction-time errors
//!
//! Commands never fail; the only errors are misconfigurations caught while a game
//! is being built.

use thiserror::Error;

use crate::types::Tetromino;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("playfield {width}x{height} is smaller than the {min}x{min} minimum")]
    InvalidDimensions {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("spawn shape of {piece:?} does not fit a {width}x{height} playfield")]
    SpawnOutOfBounds {
        piece: Tetromino,
        width: usize,
        height: usize,
    },
}

impl ConfigError {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::InvalidDimensions { .. } => "invalid_dimensions",
            ConfigError::SpawnOutOfBounds { .. } => "spawn_out_of_bounds",
        }
    }
}
