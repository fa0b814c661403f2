//! Playfield module - manages the game grid
//!
//! The playfield is a `height x width` grid where each cell is empty or tagged with
//! the tetromino that filled it. Uses a flat vector (row-major) sized once at
//! construction; dimensions never change afterwards.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left wall.
//!
//! All collision queries take the footprint the piece currently occupies into
//! account, so a falling piece never collides with itself while it moves.

use crate::types::{contains, translate, Cell, Coordinate, Coordinates, Tetromino};

/// The game grid
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create an empty playfield
    ///
    /// Both dimensions must be non-zero; the engine validates sizes before it
    /// gets here.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "playfield must be at least 1x1, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_out_of_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_out_of_bounds(&self, row: i32, col: i32) -> bool {
        row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width
    }

    pub fn is_any_out_of_bounds(&self, coordinates: &[Coordinate]) -> bool {
        coordinates
            .iter()
            .any(|&(row, col)| self.is_out_of_bounds(row, col))
    }

    /// Out-of-bounds positions count as occupied
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        !matches!(self.get(row, col), Some(None))
    }

    /// Check whether any position of `new` that is not also part of `old` is occupied
    ///
    /// `old` is the footprint the piece is leaving, so those cells are treated as
    /// vacant. Pass an empty slice to test a footprint against the bare grid.
    pub fn is_any_occupied(&self, new: &[Coordinate], old: &[Coordinate]) -> bool {
        new.iter()
            .any(|&(row, col)| !contains(old, row, col) && self.is_occupied(row, col))
    }

    pub fn is_occupied_left(&self, coordinates: &[Coordinate]) -> bool {
        self.is_occupied_beside(coordinates, 0, -1)
    }

    pub fn is_occupied_right(&self, coordinates: &[Coordinate]) -> bool {
        self.is_occupied_beside(coordinates, 0, 1)
    }

    pub fn is_occupied_below(&self, coordinates: &[Coordinate]) -> bool {
        self.is_occupied_beside(coordinates, 1, 0)
    }

    /// Neighbor cells that belong to the same footprint never block
    fn is_occupied_beside(&self, coordinates: &[Coordinate], d_row: i32, d_col: i32) -> bool {
        coordinates.iter().any(|&(row, col)| {
            let (r, c) = (row + d_row, col + d_col);
            !contains(coordinates, r, c) && self.is_occupied(r, c)
        })
    }

    pub fn is_left_wall(&self, col: i32) -> bool {
        col <= 0
    }

    pub fn is_right_wall(&self, col: i32) -> bool {
        col >= self.width as i32 - 1
    }

    pub fn is_top(&self, row: i32) -> bool {
        row <= 0
    }

    pub fn is_floor(&self, row: i32) -> bool {
        row >= self.height as i32 - 1
    }

    pub fn touches_left_wall(&self, coordinates: &[Coordinate]) -> bool {
        coordinates.iter().any(|&(_, col)| self.is_left_wall(col))
    }

    pub fn touches_right_wall(&self, coordinates: &[Coordinate]) -> bool {
        coordinates.iter().any(|&(_, col)| self.is_right_wall(col))
    }

    pub fn touches_top(&self, coordinates: &[Coordinate]) -> bool {
        coordinates.iter().any(|&(row, _)| self.is_top(row))
    }

    pub fn touches_floor(&self, coordinates: &[Coordinate]) -> bool {
        coordinates.iter().any(|&(row, _)| self.is_floor(row))
    }

    /// A piece has landed when it rests on the floor or on another cell
    pub fn has_landed(&self, coordinates: &[Coordinate]) -> bool {
        self.touches_floor(coordinates) || self.is_occupied_below(coordinates)
    }

    /// True when not a single cell is empty
    pub fn is_playfield_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Indices of all full rows, top to bottom
    pub fn get_complete_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Paint `piece` at each position without any collision check
    pub fn spawn(&mut self, piece: Tetromino, coordinates: &Coordinates) {
        for &(row, col) in coordinates {
            let painted = self.set(row, col, Some(piece));
            debug_assert!(painted, "spawn outside the playfield at ({row}, {col})");
        }
    }

    /// Clear every `from` cell, then paint every `to` cell
    pub fn move_piece(&mut self, piece: Tetromino, from: &Coordinates, to: &Coordinates) {
        for &(row, col) in from {
            self.set(row, col, None);
        }
        for &(row, col) in to {
            let painted = self.set(row, col, Some(piece));
            debug_assert!(painted, "move outside the playfield to ({row}, {col})");
        }
    }

    /// Move `piece` by `(d_row, d_col)` and return its new coordinates
    pub fn translate(
        &mut self,
        piece: Tetromino,
        coordinates: &Coordinates,
        d_row: i32,
        d_col: i32,
    ) -> Coordinates {
        let to = translate(coordinates, d_row, d_col);
        self.move_piece(piece, coordinates, &to);
        to
    }

    /// Remove the given rows, shifting everything above them down
    ///
    /// Every listed row vanishes and each surviving row drops by the number of
    /// removed rows below it; the vacated rows at the top come back empty. Order
    /// and duplicates in `rows` do not matter, and out-of-range indices are ignored.
    /// Uses a single bottom-up compaction pass, so earlier removals never shift the
    /// indices of later ones.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        let width = self.width;
        let mut write_row = self.height;

        // Scan from bottom to top
        for read_row in (0..self.height).rev() {
            if rows.contains(&read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Copy the grid into row vectors (for snapshots and display)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH, crate::types::DEFAULT_HEIGHT)
    }
}
