//! SRS Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` so callers can depend on one
//! package: `srs_tetris::{types, core, engine}`.

pub use srs_tetris_core as core;
pub use srs_tetris_engine as engine;
pub use srs_tetris_types as types;
