//! Scoring tests - Nintendo line values, soft drops and level progression

use srs_tetris::core::{
    calculate_line_score, LevelProgression, NintendoScoring, ScoreCalculator,
    StandardLevelProgression,
};
use srs_tetris::types::Stats;

#[test]
fn test_single_at_level_zero() {
    assert_eq!(NintendoScoring.get_score(0, 1, 0), 40);
}

#[test]
fn test_tetris_plus_soft_drops() {
    assert_eq!(NintendoScoring.get_score(0, 4, 3), 1203);
}

#[test]
fn test_level_multiplies_line_value_only() {
    assert_eq!(NintendoScoring.get_score(3, 2, 10), 100 * 4 + 10);
    assert_eq!(NintendoScoring.get_score(9, 0, 7), 7);
    assert_eq!(calculate_line_score(3, 1), 600);
}

#[test]
fn test_level_progression_ten_lines() {
    let progression = StandardLevelProgression::default();
    assert_eq!(progression.lines_per_level(), 10);

    let mut level = 1;
    let mut total = 0;
    let mut levels = Vec::new();
    for cleared in [4, 4, 1, 1, 4, 4, 4] {
        total += cleared;
        let next = progression.get_level(level, total);
        assert!(next >= level);
        level = next;
        levels.push(level);
    }
    // First step at 10 lines, second at 20
    assert_eq!(levels, vec![1, 1, 1, 2, 2, 2, 3]);
    assert_eq!(total, 22);
}

#[test]
fn test_tetris_percentage() {
    // One tetris and one single
    let stats = Stats::new(5, 1);
    assert_eq!(stats.total_lines_cleared(), 5);
    assert_eq!(stats.total_tetrises(), 1);
    assert!((stats.tetris_percentage() - 0.2).abs() < f64::EPSILON);

    assert_eq!(Stats::default().tetris_percentage(), 0.0);
}
