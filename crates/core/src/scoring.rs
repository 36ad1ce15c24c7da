//! Scoring module - line-clear points, level progression and fall speed
//!
//! All functions here are pure; the controller only stores the score and
//! derives everything else from it.

use std::time::Duration;

use crate::types::{BASE_TICKS_PER_SECOND, LINE_CLEAR_BASE_SCORE, MAX_LEVEL, SCORE_PER_LEVEL};

/// Points for one lock that cleared `lines` rows: `lines² × 100`.
///
/// The bonus is per lock, so two separate singles are worth 200 while a
/// four-line clear is worth 1600.
pub fn line_clear_score(lines: usize) -> u32 {
    let lines = lines as u32;
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE_SCORE)
}

/// Level for a score: `min(10, score / 1000 + 1)`
pub fn level_for_score(score: u32) -> u32 {
    (score / SCORE_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Gravity rate for a level (`1 + level`)
pub fn ticks_per_second(level: u32) -> u32 {
    BASE_TICKS_PER_SECOND + level
}

/// Wall-clock time between two gravity ticks at `level`
pub fn tick_interval(level: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(ticks_per_second(level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 400);
        assert_eq!(line_clear_score(3), 900);
        assert_eq!(line_clear_score(4), 1600);
    }

    #[test]
    fn test_quadratic_bonus_is_per_event() {
        let two_singles = line_clear_score(1) + line_clear_score(1);
        assert_eq!(two_singles, 200);
        assert!(line_clear_score(2) > two_singles);
    }

    #[test]
    fn test_level_table() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(1000), 2);
        assert_eq!(level_for_score(8999), 9);
        assert_eq!(level_for_score(9000), 10);
        assert_eq!(level_for_score(9999), 10);
        assert_eq!(level_for_score(u32::MAX), 10);
    }

    #[test]
    fn test_speed_grows_with_level() {
        assert_eq!(ticks_per_second(1), 2);
        assert_eq!(ticks_per_second(10), 11);
        assert_eq!(tick_interval(1), Duration::from_millis(500));
        assert_eq!(tick_interval(3), Duration::from_millis(250));
        assert!(tick_interval(10) < tick_interval(9));
    }
}
