//! Scoring module - flat per-line scoring
//!
//! Every cleared row is worth the same fixed amount; clearing several rows in
//! one lock scores them individually with no multiplier, combo, or level
//! scaling.

use crate::types::POINTS_PER_LINE;

/// Points awarded for clearing `lines` rows in a single lock
pub fn line_clear_score(lines: usize) -> u32 {
    lines as u32 * POINTS_PER_LINE
}
