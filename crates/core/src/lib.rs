//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the building blocks the game engine is assembled from. It has
//! **zero dependencies** on rendering, input, timing, or I/O.
//!
//! # Module Structure
//!
//! - [`playfield`]: the grid with bounds, collision, landing and line-clear queries
//! - [`rotation`]: spawn tables and table-driven SRS rotation (the only code that
//!   knows piece shapes)
//! - [`scoring`]: Nintendo scoring and level progression
//! - [`generator`]: 7-bag and fixed-sequence piece generators
//!
//! The four policies the engine consumes are traits ([`RotationMechanics`],
//! [`ScoreCalculator`], [`LevelProgression`], [`TetrominoGenerator`]) so a game can
//! inject its own implementation of any of them.
//!
//! # Example
//!
//! ```
//! use srs_tetris_core::{Playfield, RotationMechanics, SrsRotation};
//! use srs_tetris_core::types::Tetromino;
//!
//! let srs = SrsRotation::new(10);
//! let mut playfield = Playfield::new(10, 20);
//!
//! let coords = srs.get_spawn_coordinates(Tetromino::I);
//! assert_eq!(coords, [(0, 3), (0, 4), (0, 5), (0, 6)]);
//!
//! playfield.spawn(Tetromino::I, &coords);
//! let lowered = playfield.translate(Tetromino::I, &coords, 1, 0);
//! assert!(!playfield.has_landed(&lowered));
//! ```

pub mod generator;
pub mod playfield;
pub mod rotation;
pub mod scoring;

pub use srs_tetris_types as types;

// Re-export commonly used types for convenience
pub use generator::{CyclicGenerator, SevenBag, SimpleRng, TetrominoGenerator};
pub use playfield::Playfield;
pub use rotation::{get_delta_table, RotationMechanics, SrsRotation};
pub use scoring::{
    calculate_line_score, LevelProgression, NintendoScoring, ScoreCalculator,
    StandardLevelProgression,
};
