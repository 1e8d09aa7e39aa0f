use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::model::structures::blended_expectation::BlendedExpectation;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSubmission {
    pub puzzle_id: String,
    pub user_id: String,
    pub language_id: String,
    pub cost: u32,
    pub submitted_at: DateTime<FixedOffset>,
    pub expectation: BlendedExpectation,
    /// `score_scale * sb / cost`
    pub score: f64
}

impl ScoredSubmission {
    /// True if this submission holds its language's record on the puzzle.
    /// Lowering its cost would also lower `s`, and therefore `sb`.
    pub fn is_record_holder(&self) -> bool {
        self.cost == self.expectation.s
    }
}
