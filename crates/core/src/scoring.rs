//! Scoring module - line-clear points and level progression
//!
//! Points follow the classic table (40/100/300/1200 for 1-4 rows) scaled by
//! `level + 1`. A lock that clears more than four rows at once (only possible
//! on a seeded grid) scores one full four-row award per complete group of
//! four plus the table entry for the remainder, which keeps the curve
//! non-decreasing.

use crate::types::{
    DROP_INTERVALS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points awarded for clearing `rows` rows in one lock at `level`
///
/// Zero for zero rows, superlinear in `rows`.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    let groups = (rows / 4) as u32;
    let base = LINE_SCORES[4]
        .saturating_mul(groups)
        .saturating_add(LINE_SCORES[rows % 4]);
    base.saturating_mul(level.saturating_add(1))
}

/// Level reached after `lines` cleared rows
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Suggested spacing between driver ticks at `level`, in milliseconds
pub fn tick_interval_ms(level: u32) -> u32 {
    let last = DROP_INTERVALS.len() - 1;
    if (level as usize) <= last {
        return DROP_INTERVALS[level as usize];
    }
    let extra = (level - last as u32).saturating_mul(DROP_INTERVAL_STEP_MS);
    DROP_INTERVALS[last]
        .saturating_sub(extra)
        .max(DROP_INTERVAL_MIN_MS)
}
