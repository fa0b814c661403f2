//! Game configuration
//!
//! Plain data describing a new game. The engine reads it once at construction;
//! changing a config afterwards has no effect on a running game.

use crate::error::ConfigError;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_START_LEVEL, DEFAULT_WIDTH, MIN_DIMENSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Playfield width in columns
    pub width: usize,
    /// Playfield height in rows
    pub height: usize,
    /// Level the game starts at; values below 1 are raised to 1
    pub start_level: u32,
    /// Seed for the default 7-bag generator
    pub seed: u32,
}

impl GameConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_start_level(mut self, start_level: u32) -> Self {
        self.start_level = start_level;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Start level after clamping to at least 1
    pub fn effective_start_level(&self) -> u32 {
        self.start_level.max(1)
    }

    /// Reject playfields smaller than the minimum in either direction
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min: MIN_DIMENSION,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start_level: DEFAULT_START_LEVEL,
            seed: 1,
        }
    }
}
