use serde::{Deserialize, Serialize};

/// A score as it appears on the currently deployed leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineEntry {
    pub user_id: String,
    /// Empty on the overall leaderboard
    pub language_id: Option<String>,
    pub points: f64,
    pub rank: u32,
    pub puzzles: u32,
    pub cost: u64
}
