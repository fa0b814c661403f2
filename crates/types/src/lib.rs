//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the playfield, the rotation
//! tables, and the game engine. All types are plain data with no behavior beyond
//! small conversions, so they can be shared freely with a presentation layer.
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Minimum**: 4 x 4, the smallest board every piece can spawn on
//!
//! # Coordinates
//!
//! A piece's footprint is an ordered array of exactly four `(row, column)` pairs.
//! The order is part of the contract: index `i` always names the same physical
//! frame of the piece, and the rotation tables displace each frame by its index.
//!
//! # Orientations
//!
//! Orientations are named by where the first frame of a piece points on a clock
//! face. The cycle only runs clockwise:
//!
//! | From | To |
//! |------|----|
//! | 9:00 | 12:00 |
//! | 12:00 | 3:00 |
//! | 3:00 | 6:00 |
//! | 6:00 | 9:00 |
//!
//! # Examples
//!
//! ```
//! use srs_tetris_types::{translate, Orientation, Tetromino};
//!
//! let piece = Tetromino::from_str("t").unwrap();
//! assert_eq!(piece, Tetromino::T);
//!
//! let orientation = Orientation::NineOClock;
//! assert_eq!(orientation.next_clockwise(), Orientation::TwelveOClock);
//!
//! let moved = translate(&[(0, 3), (0, 4), (0, 5), (0, 6)], 1, -1);
//! assert_eq!(moved, [(1, 2), (1, 3), (1, 4), (1, 5)]);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_HEIGHT: usize = 20;

/// Smallest accepted board edge; every spawn shape fits in a 4 x 4 box
pub const MIN_DIMENSION: usize = 4;

/// Number of upcoming pieces kept in the lookahead queue
pub const MAX_NEXT_PIECES: usize = 7;

/// Level a new game starts at unless configured otherwise
pub const DEFAULT_START_LEVEL: u32 = 1;

/// Lines needed per level step in the standard progression
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points (Tetris!)
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece types
///
/// A tetromino is only a tag: it carries no position. The same value marks
/// occupied cells on the playfield and selects shape tables in the rotation
/// mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tetromino {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Tetromino {
    /// All seven variants, in declaration order
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::J,
        Tetromino::L,
        Tetromino::O,
        Tetromino::S,
        Tetromino::T,
        Tetromino::Z,
    ];

    /// Parse a tetromino from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use srs_tetris_types::Tetromino;
    ///
    /// assert_eq!(Tetromino::from_str("i"), Some(Tetromino::I));
    /// assert_eq!(Tetromino::from_str("O"), Some(Tetromino::O));
    /// assert_eq!(Tetromino::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Tetromino::I),
            "j" => Some(Tetromino::J),
            "l" => Some(Tetromino::L),
            "o" => Some(Tetromino::O),
            "s" => Some(Tetromino::S),
            "t" => Some(Tetromino::T),
            "z" => Some(Tetromino::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tetromino::I => "i",
            Tetromino::J => "j",
            Tetromino::L => "l",
            Tetromino::O => "o",
            Tetromino::S => "s",
            Tetromino::T => "t",
            Tetromino::Z => "z",
        }
    }
}

/// Rotation state of a piece, named by the clock position its first frame points at
///
/// Every piece spawns at [`Orientation::NineOClock`]. The only transition is a
/// clockwise quarter turn: 9:00 → 12:00 → 3:00 → 6:00 → 9:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    NineOClock,
    TwelveOClock,
    ThreeOClock,
    SixOClock,
}

impl Orientation {
    /// All four orientations in clockwise order starting from spawn
    pub const ALL: [Orientation; 4] = [
        Orientation::NineOClock,
        Orientation::TwelveOClock,
        Orientation::ThreeOClock,
        Orientation::SixOClock,
    ];

    /// The orientation one clockwise quarter turn from `self`
    ///
    /// # Examples
    ///
    /// ```
    /// use srs_tetris_types::Orientation;
    ///
    /// assert_eq!(Orientation::NineOClock.next_clockwise(), Orientation::TwelveOClock);
    /// assert_eq!(Orientation::TwelveOClock.next_clockwise(), Orientation::ThreeOClock);
    /// assert_eq!(Orientation::ThreeOClock.next_clockwise(), Orientation::SixOClock);
    /// assert_eq!(Orientation::SixOClock.next_clockwise(), Orientation::NineOClock);
    /// ```
    pub fn next_clockwise(&self) -> Self {
        match self {
            Orientation::NineOClock => Orientation::TwelveOClock,
            Orientation::TwelveOClock => Orientation::ThreeOClock,
            Orientation::ThreeOClock => Orientation::SixOClock,
            Orientation::SixOClock => Orientation::NineOClock,
        }
    }

    /// Advance `self` one clockwise quarter turn in place
    pub fn rotate_clockwise(&mut self) {
        *self = self.next_clockwise();
    }

    /// Position in the clockwise cycle (9:00 = 0 ... 6:00 = 3)
    pub fn index(&self) -> usize {
        match self {
            Orientation::NineOClock => 0,
            Orientation::TwelveOClock => 1,
            Orientation::ThreeOClock => 2,
            Orientation::SixOClock => 3,
        }
    }

    /// Convert to a short string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::NineOClock => "9:00",
            Orientation::TwelveOClock => "12:00",
            Orientation::ThreeOClock => "3:00",
            Orientation::SixOClock => "6:00",
        }
    }
}

/// A single `(row, column)` position; signed so candidate moves may leave the board
pub type Coordinate = (i32, i32);

/// The four frames of one piece, in the piece's fixed frame order
pub type Coordinates = [Coordinate; 4];

/// Shift every frame by `(d_row, d_col)`, keeping frame order
pub fn translate(coordinates: &Coordinates, d_row: i32, d_col: i32) -> Coordinates {
    coordinates.map(|(row, col)| (row + d_row, col + d_col))
}

/// Check whether `(row, col)` is one of the given positions
pub fn contains(coordinates: &[Coordinate], row: i32, col: i32) -> bool {
    coordinates.iter().any(|&(r, c)| r == row && c == col)
}

/// A cell on the playfield
///
/// - `None`: Empty cell
/// - `Some(Tetromino)`: Cell filled by a piece of that type
pub type Cell = Option<Tetromino>;

/// Outcome of every engine command
///
/// Commands never fail with an error; a rejected move is reported as
/// [`PlayResult::ActionNotAllowed`] and leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayResult {
    /// The move was applied and the piece is still falling
    StillDescending,
    /// The piece locked and the next piece has spawned
    Landed,
    /// The move was rejected (out of bounds or blocked); nothing changed
    ActionNotAllowed,
    /// The game has ended; no further command changes state
    GameOver,
}

/// Read-only line-clear statistics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    total_lines_cleared: u32,
    total_tetrises: u32,
    tetris_percentage: f64,
}

impl Stats {
    /// Build a snapshot, deriving the tetris percentage
    ///
    /// The percentage is `total_tetrises / total_lines_cleared`, or 0 before any
    /// line has been cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use srs_tetris_types::Stats;
    ///
    /// let stats = Stats::new(5, 1);
    /// assert_eq!(stats.tetris_percentage(), 0.2);
    /// assert_eq!(Stats::new(0, 0).tetris_percentage(), 0.0);
    /// ```
    pub fn new(total_lines_cleared: u32, total_tetrises: u32) -> Self {
        let tetris_percentage = if total_lines_cleared == 0 {
            0.0
        } else {
            f64::from(total_tetrises) / f64::from(total_lines_cleared)
        };
        Self {
            total_lines_cleared,
            total_tetrises,
            tetris_percentage,
        }
    }

    pub fn total_lines_cleared(&self) -> u32 {
        self.total_lines_cleared
    }

    pub fn total_tetrises(&self) -> u32 {
        self.total_tetrises
    }

    pub fn tetris_percentage(&self) -> f64 {
        self.tetris_percentage
    }
}
