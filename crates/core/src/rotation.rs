//! Rotation module - spawn placement and table-driven SRS rotation
//!
//! This is the only place that knows what each tetromino looks like. Everything
//! else treats a piece as an opaque tag plus its four coordinates.
//!
//! Coordinates are `(row, col)` and the frame order within each spawn shape is
//! significant: rotation moves frame `i` by `DELTAS[piece][orientation][i]`, so
//! the frame that starts as "the top of the J" stays the top of the J through
//! every turn. Reordering a spawn table silently breaks rotation.
//!
//! Rotation is purely geometric. It never checks bounds or collisions; the
//! engine validates the result before committing it.

use crate::types::{Coordinate, Coordinates, Orientation, Tetromino};

/// Computes where pieces appear and how they turn
pub trait RotationMechanics {
    /// Spawn footprint of `piece`, horizontally centered, top row at 0
    fn get_spawn_coordinates(&self, piece: Tetromino) -> Coordinates;

    /// Footprint after one clockwise quarter turn from `current_orientation`
    fn rotate(
        &self,
        piece: Tetromino,
        current_coordinates: &Coordinates,
        current_orientation: Orientation,
    ) -> Coordinates;
}

/// Per-frame `(d_row, d_col)` displacement for each starting orientation
pub type DeltaTable = [[Coordinate; 4]; 4];

/// Spawn layout: bounding-box width plus frame offsets inside the box
struct SpawnShape {
    width: i32,
    frames: Coordinates,
}

/// Get the spawn layout for a piece
fn get_spawn_shape(piece: Tetromino) -> SpawnShape {
    match piece {
        // ####
        Tetromino::I => SpawnShape {
            width: 4,
            frames: [(0, 0), (0, 1), (0, 2), (0, 3)],
        },
        // #..
        // ###
        Tetromino::J => SpawnShape {
            width: 3,
            frames: [(0, 0), (1, 0), (1, 1), (1, 2)],
        },
        // ..#
        // ###
        Tetromino::L => SpawnShape {
            width: 3,
            frames: [(1, 0), (1, 1), (1, 2), (0, 2)],
        },
        // ##
        // ##
        Tetromino::O => SpawnShape {
            width: 2,
            frames: [(0, 0), (0, 1), (1, 0), (1, 1)],
        },
        // .##.
        // ##..
        Tetromino::S => SpawnShape {
            width: 4,
            frames: [(1, 0), (1, 1), (0, 1), (0, 2)],
        },
        // .#.
        // ###
        Tetromino::T => SpawnShape {
            width: 3,
            frames: [(1, 0), (0, 1), (1, 1), (1, 2)],
        },
        // ##..
        // .##.
        Tetromino::Z => SpawnShape {
            width: 4,
            frames: [(0, 0), (0, 1), (1, 1), (1, 2)],
        },
    }
}

/// Get the rotation deltas for a piece; `None` for the O piece
pub fn get_delta_table(piece: Tetromino) -> Option<&'static DeltaTable> {
    match piece {
        Tetromino::I => Some(&I_DELTAS),
        Tetromino::J => Some(&J_DELTAS),
        Tetromino::L => Some(&L_DELTAS),
        Tetromino::O => None,
        Tetromino::S => Some(&S_DELTAS),
        Tetromino::T => Some(&T_DELTAS),
        Tetromino::Z => Some(&Z_DELTAS),
    }
}

// Rows are indexed by the orientation being left (9:00, 12:00, 3:00, 6:00).
// Each column sums to zero over the four rows, so four turns are the identity.

const I_DELTAS: DeltaTable = [
    [(-1, 2), (0, 1), (1, 0), (2, -1)],
    [(2, 1), (1, 0), (0, -1), (-1, -2)],
    [(1, -2), (0, -1), (-1, 0), (-2, 1)],
    [(-2, -1), (-1, 0), (0, 1), (1, 2)],
];

const J_DELTAS: DeltaTable = [
    [(0, 2), (-1, 1), (0, 0), (1, -1)],
    [(2, 0), (1, 1), (0, 0), (-1, -1)],
    [(0, -2), (1, -1), (0, 0), (-1, 1)],
    [(-2, 0), (-1, -1), (0, 0), (1, 1)],
];

const L_DELTAS: DeltaTable = [
    [(-1, 1), (0, 0), (1, -1), (2, 0)],
    [(1, 1), (0, 0), (-1, -1), (0, -2)],
    [(1, -1), (0, 0), (-1, 1), (-2, 0)],
    [(-1, -1), (0, 0), (1, 1), (0, 2)],
];

const S_DELTAS: DeltaTable = [
    [(-1, 1), (0, 0), (1, 1), (2, 0)],
    [(1, 1), (0, 0), (1, -1), (0, -2)],
    [(1, -1), (0, 0), (-1, -1), (-2, 0)],
    [(-1, -1), (0, 0), (-1, 1), (0, 2)],
];

const T_DELTAS: DeltaTable = [
    [(-1, 1), (1, 1), (0, 0), (1, -1)],
    [(1, 1), (1, -1), (0, 0), (-1, -1)],
    [(1, -1), (-1, -1), (0, 0), (-1, 1)],
    [(-1, -1), (-1, 1), (0, 0), (1, 1)],
];

const Z_DELTAS: DeltaTable = [
    [(0, 2), (1, 1), (0, 0), (1, -1)],
    [(2, 0), (1, -1), (0, 0), (-1, -1)],
    [(0, -2), (-1, -1), (0, 0), (-1, 1)],
    [(-2, 0), (-1, 1), (0, 0), (1, 1)],
];

/// Super Rotation System tables without wall kicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrsRotation {
    playfield_width: usize,
}

impl SrsRotation {
    /// Create the tables for a playfield `playfield_width` columns wide
    pub fn new(playfield_width: usize) -> Self {
        Self { playfield_width }
    }

    pub fn playfield_width(&self) -> usize {
        self.playfield_width
    }
}

impl RotationMechanics for SrsRotation {
    fn get_spawn_coordinates(&self, piece: Tetromino) -> Coordinates {
        let shape = get_spawn_shape(piece);
        // Floor division: odd widths bias one column left
        let start_col = (self.playfield_width as i32 - shape.width).div_euclid(2);
        shape.frames.map(|(row, col)| (row, start_col + col))
    }

    fn rotate(
        &self,
        piece: Tetromino,
        current_coordinates: &Coordinates,
        current_orientation: Orientation,
    ) -> Coordinates {
        let Some(table) = get_delta_table(piece) else {
            return *current_coordinates;
        };
        let deltas = &table[current_orientation.index()];

        let mut rotated = *current_coordinates;
        for (frame, &(d_row, d_col)) in rotated.iter_mut().zip(deltas) {
            frame.0 += d_row;
            frame.1 += d_col;
        }
        rotated
    }
}
