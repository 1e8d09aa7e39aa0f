use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single solution to a puzzle, as submitted by a user in one language.
///
/// Only the best submission per (puzzle, user, language) is meaningful to the engine;
/// see [`crate::model::aggregates::deduplicate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub puzzle_id: String,
    pub user_id: String,
    pub language_id: String,
    /// Strokes. Lower is better, always positive.
    pub cost: u32,
    pub submitted_at: DateTime<FixedOffset>
}

impl Submission {
    pub fn new(
        puzzle_id: &str,
        user_id: &str,
        language_id: &str,
        cost: u32,
        submitted_at: DateTime<FixedOffset>
    ) -> Submission {
        Submission {
            puzzle_id: puzzle_id.to_string(),
            user_id: user_id.to_string(),
            language_id: language_id.to_string(),
            cost,
            submitted_at
        }
    }

    /// The dedup key: (puzzle, user, language)
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.puzzle_id, &self.user_id, &self.language_id)
    }

    /// True if `self` should be kept over `other` for the same key.
    /// Lower cost wins, earlier submission breaks ties.
    pub fn is_better_than(&self, other: &Submission) -> bool {
        (self.cost, self.submitted_at) < (other.cost, other.submitted_at)
    }
}
