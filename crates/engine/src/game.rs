//! Game engine - the command/response state machine
//!
//! The engine owns the playfield, the falling piece and the lookahead queue. Each
//! command (`rotate`, `left`, `right`, `down`, `drop`) runs to completion and
//! reports a [`PlayResult`]; locking, line clears and spawning the next piece
//! happen synchronously inside the command that caused the landing.
//!
//! The falling piece is painted into the grid, so board observers see it without
//! any overlay step. Validity checks exclude the piece's own footprint.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::core::{
    LevelProgression, NintendoScoring, Playfield, RotationMechanics, ScoreCalculator, SevenBag,
    SrsRotation, StandardLevelProgression, TetrominoGenerator,
};
use crate::error::ConfigError;
use crate::snapshot::EngineSnapshot;
use crate::types::{
    translate, Cell, Coordinates, Orientation, PlayResult, Stats, Tetromino, MAX_NEXT_PIECES,
};

/// Assembles a [`GameEngine`] from a config plus optional collaborators
///
/// Any collaborator left unset falls back to the standard one: SRS tables sized
/// to the configured width, a 7-bag seeded from the config, Nintendo scoring and
/// ten lines per level.
pub struct GameBuilder {
    config: GameConfig,
    rotation: Option<Box<dyn RotationMechanics>>,
    generator: Option<Box<dyn TetrominoGenerator>>,
    score_calculator: Option<Box<dyn ScoreCalculator>>,
    level_progression: Option<Box<dyn LevelProgression>>,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rotation: None,
            generator: None,
            score_calculator: None,
            level_progression: None,
        }
    }

    pub fn rotation(mut self, rotation: impl RotationMechanics + 'static) -> Self {
        self.rotation = Some(Box::new(rotation));
        self
    }

    pub fn generator(mut self, generator: impl TetrominoGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn score_calculator(mut self, score_calculator: impl ScoreCalculator + 'static) -> Self {
        self.score_calculator = Some(Box::new(score_calculator));
        self
    }

    pub fn level_progression(mut self, level_progression: impl LevelProgression + 'static) -> Self {
        self.level_progression = Some(Box::new(level_progression));
        self
    }

    /// Validate the config, then spawn the first piece
    pub fn build(self) -> Result<GameEngine, ConfigError> {
        let config = self.config;
        config.validate()?;

        let rotation = self
            .rotation
            .unwrap_or_else(|| Box::new(SrsRotation::new(config.width)));
        let playfield = Playfield::new(config.width, config.height);

        for piece in Tetromino::ALL {
            let coordinates = rotation.get_spawn_coordinates(piece);
            if playfield.is_any_out_of_bounds(&coordinates) {
                return Err(ConfigError::SpawnOutOfBounds {
                    piece,
                    width: config.width,
                    height: config.height,
                });
            }
        }

        let mut generator = self
            .generator
            .unwrap_or_else(|| Box::new(SevenBag::new(config.seed)));

        let mut next_pieces = ArrayVec::new();
        while !next_pieces.is_full() {
            next_pieces.push(generator.next());
        }

        let mut engine = GameEngine {
            playfield,
            current_piece: Tetromino::I,
            coordinates: [(0, 0); 4],
            orientation: Orientation::default(),
            next_pieces,
            level: config.effective_start_level(),
            score: 0,
            soft_drop_presses: 0,
            total_lines_cleared: 0,
            total_tetrises: 0,
            game_over: false,
            rotation,
            generator,
            score_calculator: self
                .score_calculator
                .unwrap_or_else(|| Box::new(NintendoScoring)),
            level_progression: self
                .level_progression
                .unwrap_or_else(|| Box::new(StandardLevelProgression::default())),
        };

        let piece = engine.take_next_piece();
        let coordinates = engine.rotation.get_spawn_coordinates(piece);
        engine.playfield.spawn(piece, &coordinates);
        engine.current_piece = piece;
        engine.coordinates = coordinates;

        debug!(
            width = config.width,
            height = config.height,
            level = engine.level,
            seed = config.seed,
            first_piece = piece.as_str(),
            "game engine built"
        );

        Ok(engine)
    }
}

/// A running game
pub struct GameEngine {
    playfield: Playfield,
    current_piece: Tetromino,
    coordinates: Coordinates,
    orientation: Orientation,
    next_pieces: ArrayVec<Tetromino, MAX_NEXT_PIECES>,
    level: u32,
    score: u32,
    /// Presses of `down` since the last lock
    soft_drop_presses: u32,
    total_lines_cleared: u32,
    total_tetrises: u32,
    game_over: bool,
    rotation: Box<dyn RotationMechanics>,
    generator: Box<dyn TetrominoGenerator>,
    score_calculator: Box<dyn ScoreCalculator>,
    level_progression: Box<dyn LevelProgression>,
}

impl GameEngine {
    /// Start a game with the standard collaborators
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        GameBuilder::new(config).build()
    }

    pub fn builder(config: GameConfig) -> GameBuilder {
        GameBuilder::new(config)
    }

    pub fn current_piece(&self) -> Tetromino {
        self.current_piece
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Upcoming pieces, head first
    pub fn next_pieces(&self) -> &[Tetromino] {
        &self.next_pieces
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn soft_drop_presses(&self) -> u32 {
        self.soft_drop_presses
    }

    pub fn stats(&self) -> Stats {
        Stats::new(self.total_lines_cleared, self.total_tetrises)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    #[cfg(test)]
    pub(crate) fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    /// Board contents top to bottom, falling piece included
    pub fn board(&self) -> Vec<Vec<Cell>> {
        self.playfield.to_rows()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board(),
            current_piece: self.current_piece,
            coordinates: self.coordinates,
            orientation: self.orientation,
            next_pieces: self.next_pieces.to_vec(),
            level: self.level,
            score: self.score,
            stats: self.stats(),
            game_over: self.game_over,
        }
    }

    /// Turn the falling piece one quarter clockwise
    pub fn rotate(&mut self) -> PlayResult {
        if self.game_over {
            return PlayResult::GameOver;
        }

        let candidate =
            self.rotation
                .rotate(self.current_piece, &self.coordinates, self.orientation);
        if !self.try_move_to(candidate) {
            return self.reject("rotate");
        }

        self.orientation.rotate_clockwise();
        self.evaluate_after_move()
    }

    pub fn left(&mut self) -> PlayResult {
        self.shift("left", 0, -1)
    }

    pub fn right(&mut self) -> PlayResult {
        self.shift("right", 0, 1)
    }

    /// Soft drop one row
    ///
    /// Counts toward the soft-drop bonus whether or not the piece moves. A piece
    /// that cannot move because it is already resting locks where it is.
    pub fn down(&mut self) -> PlayResult {
        if self.game_over {
            return PlayResult::GameOver;
        }

        self.soft_drop_presses = self.soft_drop_presses.saturating_add(1);

        let candidate = translate(&self.coordinates, 1, 0);
        if self.try_move_to(candidate) {
            return self.evaluate_after_move();
        }

        if self.playfield.has_landed(&self.coordinates) {
            return self.lock_piece();
        }
        self.reject("down")
    }

    /// Hard drop: `down` until the piece stops descending
    pub fn drop(&mut self) -> PlayResult {
        loop {
            let result = self.down();
            if result != PlayResult::StillDescending {
                return result;
            }
        }
    }

    fn shift(&mut self, command: &'static str, d_row: i32, d_col: i32) -> PlayResult {
        if self.game_over {
            return PlayResult::GameOver;
        }

        let candidate = translate(&self.coordinates, d_row, d_col);
        if !self.try_move_to(candidate) {
            return self.reject(command);
        }
        self.evaluate_after_move()
    }

    /// Commit `candidate` if it is inside the board and only overlaps the piece itself
    fn try_move_to(&mut self, candidate: Coordinates) -> bool {
        if self.playfield.is_any_out_of_bounds(&candidate)
            || self
                .playfield
                .is_any_occupied(&candidate, &self.coordinates)
        {
            return false;
        }

        self.playfield
            .move_piece(self.current_piece, &self.coordinates, &candidate);
        self.coordinates = candidate;
        true
    }

    fn reject(&self, command: &'static str) -> PlayResult {
        trace!(
            command,
            piece = self.current_piece.as_str(),
            coordinates = ?self.coordinates,
            "action not allowed"
        );
        PlayResult::ActionNotAllowed
    }

    fn evaluate_after_move(&mut self) -> PlayResult {
        if self.playfield.has_landed(&self.coordinates) {
            self.lock_piece()
        } else {
            PlayResult::StillDescending
        }
    }

    /// Clear rows, settle score and level, then bring in the next piece
    fn lock_piece(&mut self) -> PlayResult {
        let complete_rows = self.playfield.get_complete_rows();
        let lines_cleared = complete_rows.len() as u32;
        if lines_cleared > 0 {
            self.playfield.clear_rows(&complete_rows);
        }

        self.total_lines_cleared = self.total_lines_cleared.saturating_add(lines_cleared);
        if lines_cleared == 4 {
            self.total_tetrises = self.total_tetrises.saturating_add(1);
        }

        // Scored at the level the piece was played on
        let delta = self
            .score_calculator
            .get_score(self.level, lines_cleared, self.soft_drop_presses);
        self.score = self.score.saturating_add(delta);
        self.level = self
            .level_progression
            .get_level(self.level, self.total_lines_cleared);
        self.soft_drop_presses = 0;

        debug!(
            piece = self.current_piece.as_str(),
            lines_cleared,
            delta,
            level = self.level,
            "piece locked"
        );

        if lines_cleared == 0 && self.playfield.is_playfield_full() {
            return self.end_game("playfield full");
        }
        self.spawn_next_piece()
    }

    /// Pop the lookahead head and top the queue back up
    fn take_next_piece(&mut self) -> Tetromino {
        let piece = self
            .next_pieces
            .pop_at(0)
            .unwrap_or_else(|| self.generator.next());
        self.next_pieces.push(self.generator.next());
        piece
    }

    /// Head of the lookahead without consuming it
    fn peek_next_piece(&mut self) -> Tetromino {
        match self.next_pieces.first() {
            Some(&piece) => piece,
            None => {
                let piece = self.generator.next();
                self.next_pieces.push(piece);
                piece
            }
        }
    }

    fn spawn_next_piece(&mut self) -> PlayResult {
        let piece = self.peek_next_piece();
        let coordinates = self.rotation.get_spawn_coordinates(piece);

        // Block-out: the blocked piece stays queued and the locked one stays current
        if self.playfield.is_any_occupied(&coordinates, &[]) {
            return self.end_game("spawn blocked");
        }

        self.take_next_piece();
        self.current_piece = piece;
        self.coordinates = coordinates;
        self.orientation = Orientation::NineOClock;
        self.playfield.spawn(piece, &coordinates);
        PlayResult::Landed
    }

    fn end_game(&mut self, reason: &'static str) -> PlayResult {
        self.game_over = true;
        info!(
            score = self.score,
            lines = self.total_lines_cleared,
            reason,
            "game over"
        );
        PlayResult::GameOver
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("current_piece", &self.current_piece)
            .field("coordinates", &self.coordinates)
            .field("orientation", &self.orientation)
            .field("next_pieces", &self.next_pieces)
            .field("level", &self.level)
            .field("score", &self.score)
            .field("soft_drop_presses", &self.soft_drop_presses)
            .field("stats", &self.stats())
            .field("game_over", &self.game_over)
            .finish_non_exhaustive()
    }
}
