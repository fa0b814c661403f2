//! Engine tests - full command sequences through the state machine

use anyhow::Result;
use srs_tetris::core::{CyclicGenerator, LevelProgression, ScoreCalculator};
use srs_tetris::engine::{ConfigError, GameConfig, GameEngine};
use srs_tetris::types::{Orientation, PlayResult, Tetromino};

fn scripted(config: GameConfig, pieces: &[Tetromino]) -> Result<GameEngine> {
    Ok(GameEngine::builder(config)
        .generator(CyclicGenerator::new(pieces.to_vec()))
        .build()?)
}

/// Stand an I piece upright and drop it into `col` on a 4-wide board
///
/// The first turn always stands the I in column 2, so that column must still be
/// empty below the turn or the piece locks on the spot.
fn drop_upright_i(engine: &mut GameEngine, col: i32) {
    assert_eq!(engine.current_piece(), Tetromino::I);
    assert_eq!(engine.down(), PlayResult::StillDescending);
    assert_eq!(engine.rotate(), PlayResult::StillDescending);
    assert_eq!(engine.orientation(), Orientation::TwelveOClock);

    // Upright in column 2 after the first turn
    let mut at = 2;
    while at > col {
        assert_eq!(engine.left(), PlayResult::StillDescending);
        at -= 1;
    }
    while at < col {
        assert_eq!(engine.right(), PlayResult::StillDescending);
        at += 1;
    }
    assert!(engine.coordinates().iter().all(|&(_, c)| c == col));
    assert_eq!(engine.drop(), PlayResult::Landed);
}

#[test]
fn test_drop_i_piece_end_to_end() -> Result<()> {
    let mut engine = scripted(GameConfig::new(10, 20).with_start_level(1), &[Tetromino::I])?;

    assert_eq!(engine.drop(), PlayResult::Landed);

    let board = engine.board();
    for (col, cell) in board[19].iter().enumerate() {
        let expected = (3..=6).contains(&col).then_some(Tetromino::I);
        assert_eq!(*cell, expected, "row 19 col {col}");
    }
    assert_eq!(engine.stats().total_lines_cleared(), 0);
    assert_eq!(engine.score(), 19);
    assert_eq!(engine.level(), 1);

    // The next I is already on the board
    assert_eq!(engine.coordinates(), &[(0, 3), (0, 4), (0, 5), (0, 6)]);
    assert!(board[0][3..7].iter().all(|cell| *cell == Some(Tetromino::I)));
    Ok(())
}

#[test]
fn test_own_footprint_never_blocks() -> Result<()> {
    for piece in Tetromino::ALL {
        let mut engine = scripted(GameConfig::default(), &[piece])?;
        for _ in 0..3 {
            assert_eq!(engine.down(), PlayResult::StillDescending, "{piece:?}");
        }

        assert_eq!(engine.left(), PlayResult::StillDescending, "{piece:?}");
        assert_eq!(engine.right(), PlayResult::StillDescending, "{piece:?}");
        assert_eq!(engine.down(), PlayResult::StillDescending, "{piece:?}");
        for _ in 0..4 {
            assert_eq!(engine.rotate(), PlayResult::StillDescending, "{piece:?}");
        }
        assert_eq!(engine.orientation(), Orientation::NineOClock);
    }
    Ok(())
}

#[test]
fn test_walls_reject_and_preserve_state() -> Result<()> {
    let mut engine = scripted(GameConfig::default(), &[Tetromino::I])?;

    for _ in 0..3 {
        assert_eq!(engine.left(), PlayResult::StillDescending);
    }
    let at_left = *engine.coordinates();
    assert_eq!(engine.left(), PlayResult::ActionNotAllowed);
    assert_eq!(engine.coordinates(), &at_left);

    for _ in 0..6 {
        assert_eq!(engine.right(), PlayResult::StillDescending);
    }
    let at_right = *engine.coordinates();
    assert_eq!(at_right, [(0, 6), (0, 7), (0, 8), (0, 9)]);
    let board = engine.board();
    assert_eq!(engine.right(), PlayResult::ActionNotAllowed);
    assert_eq!(engine.coordinates(), &at_right);
    assert_eq!(engine.board(), board);
    Ok(())
}

#[test]
fn test_rotation_off_the_top_rejected() -> Result<()> {
    // The first I turn reaches one row above its spawn row
    let mut engine = scripted(GameConfig::default(), &[Tetromino::I])?;
    assert_eq!(engine.rotate(), PlayResult::ActionNotAllowed);
    assert_eq!(engine.orientation(), Orientation::NineOClock);
    Ok(())
}

#[test]
fn test_lock_completes_and_clears_row() -> Result<()> {
    let mut engine = scripted(
        GameConfig::default(),
        &[Tetromino::I, Tetromino::I, Tetromino::O],
    )?;

    for _ in 0..3 {
        engine.left();
    }
    assert_eq!(engine.drop(), PlayResult::Landed);
    engine.right();
    assert_eq!(engine.drop(), PlayResult::Landed);
    assert_eq!(engine.playfield().get_complete_rows(), Vec::<usize>::new());

    assert_eq!(engine.current_piece(), Tetromino::O);
    for _ in 0..4 {
        assert_eq!(engine.right(), PlayResult::StillDescending);
    }
    assert_eq!(engine.drop(), PlayResult::Landed);

    // The top half of the O dropped into the cleared row
    let board = engine.board();
    assert_eq!(board.len(), 20);
    let mut bottom = vec![None; 10];
    bottom[8] = Some(Tetromino::O);
    bottom[9] = Some(Tetromino::O);
    assert_eq!(board[19], bottom);
    assert!(board[18].iter().all(Option::is_none));

    assert_eq!(engine.stats().total_lines_cleared(), 1);
    // 19 + 19 + (40 * 2 + 18)
    assert_eq!(engine.score(), 136);
    Ok(())
}

#[test]
fn test_tetris_percentage_after_tetris_and_single() -> Result<()> {
    let mut engine = scripted(GameConfig::new(4, 8), &[Tetromino::I])?;

    // Column 2 goes last
    for col in [0, 1, 3] {
        drop_upright_i(&mut engine, col);
        assert_eq!(engine.stats().total_lines_cleared(), 0);
    }
    drop_upright_i(&mut engine, 2);
    let stats = engine.stats();
    assert_eq!(stats.total_lines_cleared(), 4);
    assert_eq!(stats.total_tetrises(), 1);
    assert!(engine.board().iter().flatten().skip(4).all(Option::is_none));

    // A flat I fills a whole row on a 4-wide board
    assert_eq!(engine.drop(), PlayResult::Landed);
    let stats = engine.stats();
    assert_eq!(stats.total_lines_cleared(), 5);
    assert_eq!(stats.total_tetrises(), 1);
    assert!((stats.tetris_percentage() - 0.2).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_ten_lines_raise_level() -> Result<()> {
    // Every flat I fills a row of a 4-wide board
    let mut engine = scripted(GameConfig::new(4, 8), &[Tetromino::I])?;

    for cleared in 1..=20u32 {
        assert_eq!(engine.drop(), PlayResult::Landed);
        assert_eq!(engine.stats().total_lines_cleared(), cleared);
        let expected = match cleared {
            0..=9 => 1,
            10..=19 => 2,
            _ => 3,
        };
        assert_eq!(engine.level(), expected, "after {cleared} lines");
    }
    Ok(())
}

#[test]
fn test_start_level_scales_line_score() -> Result<()> {
    let mut engine = scripted(
        GameConfig::new(4, 4).with_start_level(5),
        &[Tetromino::I],
    )?;

    assert_eq!(engine.drop(), PlayResult::Landed);
    assert_eq!(engine.score(), 40 * 6 + 3);
    assert_eq!(engine.level(), 5);
    Ok(())
}

#[test]
fn test_top_out_freezes_game() -> Result<()> {
    let mut engine = scripted(GameConfig::default(), &[Tetromino::O])?;

    let mut drops = 0;
    let result = loop {
        drops += 1;
        let result = engine.drop();
        if result != PlayResult::Landed || drops > 20 {
            break result;
        }
    };
    assert_eq!(result, PlayResult::GameOver);
    assert_eq!(drops, 10);
    assert!(engine.is_game_over());

    let frozen = engine.snapshot();
    assert_eq!(frozen.current_piece, Tetromino::O);
    for (row, col) in frozen.coordinates {
        assert_eq!(frozen.board[row as usize][col as usize], Some(Tetromino::O));
    }
    assert_eq!(frozen.next_pieces[0], Tetromino::O);
    assert_eq!(engine.left(), PlayResult::GameOver);
    assert_eq!(engine.right(), PlayResult::GameOver);
    assert_eq!(engine.down(), PlayResult::GameOver);
    assert_eq!(engine.rotate(), PlayResult::GameOver);
    assert_eq!(engine.drop(), PlayResult::GameOver);
    assert_eq!(engine.snapshot(), frozen);
    Ok(())
}

#[test]
fn test_lookahead_advances_fifo() -> Result<()> {
    let mut engine = scripted(GameConfig::default(), &Tetromino::ALL)?;

    assert_eq!(engine.current_piece(), Tetromino::I);
    assert_eq!(
        engine.next_pieces(),
        &[
            Tetromino::J,
            Tetromino::L,
            Tetromino::O,
            Tetromino::S,
            Tetromino::T,
            Tetromino::Z,
            Tetromino::I,
        ]
    );

    engine.drop();
    assert_eq!(engine.current_piece(), Tetromino::J);
    assert_eq!(engine.next_pieces().len(), 7);
    assert_eq!(engine.next_pieces()[0], Tetromino::L);
    assert_eq!(engine.next_pieces()[6], Tetromino::J);
    Ok(())
}

struct FlatScore;

impl ScoreCalculator for FlatScore {
    fn get_score(&self, _level: u32, lines_cleared: u32, _soft_drop_presses: u32) -> u32 {
        1000 + lines_cleared
    }
}

struct LevelPerLock;

impl LevelProgression for LevelPerLock {
    fn get_level(&self, current_level: u32, _total_lines_cleared: u32) -> u32 {
        current_level + 1
    }
}

#[test]
fn test_injected_collaborators() -> Result<()> {
    let mut engine = GameEngine::builder(GameConfig::default())
        .generator(CyclicGenerator::repeat(Tetromino::O))
        .score_calculator(FlatScore)
        .level_progression(LevelPerLock)
        .build()?;

    engine.drop();
    engine.drop();
    assert_eq!(engine.score(), 2000);
    assert_eq!(engine.level(), 3);
    Ok(())
}

#[test]
fn test_invalid_config_reported() {
    let err = GameEngine::new(GameConfig::new(10, 3)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDimensions { .. }));
    assert_eq!(err.code(), "invalid_dimensions");
    assert!(err.to_string().contains("10x3"));
}
