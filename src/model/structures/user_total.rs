use serde::Serialize;

/// Sum of a user's best score on each puzzle they solved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTotal {
    pub user_id: String,
    pub total_score: f64,
    /// Sum of the per-puzzle minimum costs, independent of which submission scored best
    pub cost: u64,
    pub puzzle_count: u32
}
