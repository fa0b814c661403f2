//! Game engine - commands in, play results out
//!
//! Wires the playfield, rotation tables, scoring, level progression and piece
//! generator from `srs-tetris-core` into a single-threaded state machine.
//!
//! # Example
//!
//! ```
//! use srs_tetris_engine::{GameConfig, GameEngine};
//! use srs_tetris_engine::core::CyclicGenerator;
//! use srs_tetris_engine::types::{PlayResult, Tetromino};
//!
//! let mut engine = GameEngine::builder(GameConfig::default())
//!     .generator(CyclicGenerator::repeat(Tetromino::I))
//!     .build()?;
//!
//! assert_eq!(engine.drop(), PlayResult::Landed);
//! assert_eq!(engine.score(), 19);
//! # Ok::<(), srs_tetris_engine::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod snapshot;

pub use srs_tetris_core as core;
pub use srs_tetris_types as types;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{GameBuilder, GameEngine};
pub use snapshot::EngineSnapshot;
