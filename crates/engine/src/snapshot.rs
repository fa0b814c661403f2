use crate::types::{Cell, Coordinates, Orientation, Stats, Tetromino};

/// Owned copy of everything a presentation layer polls
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    /// Grid rows top to bottom; includes the falling piece's cells
    pub board: Vec<Vec<Cell>>,
    pub current_piece: Tetromino,
    pub coordinates: Coordinates,
    pub orientation: Orientation,
    pub next_pieces: Vec<Tetromino>,
    pub level: u32,
    pub score: u32,
    pub stats: Stats,
    pub game_over: bool,
}

impl EngineSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
