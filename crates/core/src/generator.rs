//! Generator module - unbounded tetromino sequences
//!
//! Implements the "7-bag" randomization algorithm used in modern Tetris.
//! Each bag contains one of each piece (I, J, L, O, S, T, Z), shuffled.
//! Draws from the bag until empty, then generates a new bag.
//!
//! Also provides a simple LCG for deterministic games and a cyclic generator that
//! replays a fixed list, which is handy for scripted scenarios and tests.

use crate::types::Tetromino;

/// Produces the next piece of an endless sequence
pub trait TetrominoGenerator {
    fn next(&mut self) -> Tetromino;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    /// Current bag of pieces
    bag: [Tetromino; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
    seed: u32,
}

impl SevenBag {
    /// Create a new bag generator with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: Tetromino::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
            seed,
        };
        bag.refill_bag();
        bag
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = Tetromino::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// The seed this generator started from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[Tetromino] {
        &self.bag[self.bag_index..]
    }
}

impl Default for SevenBag {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TetrominoGenerator for SevenBag {
    fn next(&mut self) -> Tetromino {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }
}

/// Repeats a fixed sequence forever
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicGenerator {
    pieces: Vec<Tetromino>,
    index: usize,
}

impl CyclicGenerator {
    /// An empty list falls back to all seven pieces in declaration order
    pub fn new(pieces: impl IntoIterator<Item = Tetromino>) -> Self {
        let mut pieces: Vec<Tetromino> = pieces.into_iter().collect();
        if pieces.is_empty() {
            pieces = Tetromino::ALL.to_vec();
        }
        Self { pieces, index: 0 }
    }

    /// The same piece forever
    pub fn repeat(piece: Tetromino) -> Self {
        Self::new([piece])
    }
}

impl TetrominoGenerator for CyclicGenerator {
    fn next(&mut self) -> Tetromino {
        let piece = self.pieces[self.index];
        self.index = (self.index + 1) % self.pieces.len();
        piece
    }
}
