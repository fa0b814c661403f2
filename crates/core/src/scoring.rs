//! Scoring module - line clear scoring and level progression
//!
//! Classic Nintendo scoring: a base value per number of lines cleared, multiplied
//! by `(level + 1)`, plus one point per soft-drop press since the last lock. A
//! hard drop is a run of soft-drop steps, so it earns the same per-row point.
//!
//! Both policies sit behind traits so a game can plug in its own rules.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Turns a lock into a score delta
pub trait ScoreCalculator {
    /// `level` is the level before any level-up caused by this lock
    fn get_score(&self, level: u32, lines_cleared: u32, soft_drop_presses: u32) -> u32;
}

/// Decides the level after a lock
pub trait LevelProgression {
    /// Expected to be pure and never return less than `current_level`
    fn get_level(&self, current_level: u32, total_lines_cleared: u32) -> u32;
}

/// Calculate line clear score (Classic rules)
/// lines: number of lines cleared (0-4; anything else scores 0)
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    let Some(&base_score) = LINE_SCORES.get(lines as usize) else {
        return 0;
    };
    base_score.saturating_mul(level.saturating_add(1))
}

/// NES-style scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NintendoScoring;

impl ScoreCalculator for NintendoScoring {
    fn get_score(&self, level: u32, lines_cleared: u32, soft_drop_presses: u32) -> u32 {
        calculate_line_score(lines_cleared, level).saturating_add(soft_drop_presses)
    }
}

/// One level per `lines_per_level` lines cleared, counted from level 1 and never going down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardLevelProgression {
    lines_per_level: u32,
}

impl StandardLevelProgression {
    /// `lines_per_level` of 0 is treated as 1
    pub fn new(lines_per_level: u32) -> Self {
        Self {
            lines_per_level: lines_per_level.max(1),
        }
    }

    pub fn lines_per_level(&self) -> u32 {
        self.lines_per_level
    }
}

impl Default for StandardLevelProgression {
    fn default() -> Self {
        Self::new(LINES_PER_LEVEL)
    }
}

impl LevelProgression for StandardLevelProgression {
    fn get_level(&self, current_level: u32, total_lines_cleared: u32) -> u32 {
        current_level.max((total_lines_cleared / self.lines_per_level).saturating_add(1))
    }
}
