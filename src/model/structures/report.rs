use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::structures::advancement::Advancement;

/// One row of the all-puzzles comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallRow {
    pub user_id: String,
    pub total_score: f64,
    pub total_rank: u32,
    pub old_score: Option<f64>,
    pub old_rank: Option<u32>,
    pub delta_score: Option<f64>,
    pub delta_rank: Option<i64>,
    pub cost: u64,
    pub puzzle_count: u32,
    pub cost_per_puzzle: f64
}

/// One row of a single puzzle's comparison, ordered by new score descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRow {
    pub user_id: String,
    pub language_id: String,
    pub cost: u32,
    pub new_score: f64,
    pub new_rank: u32,
    pub old_score: Option<f64>,
    pub old_rank: Option<u32>,
    pub delta_score: Option<f64>,
    pub delta_rank: Option<i64>,
    /// Absent for rank 1
    pub to_rank_up: Option<Advancement>,
    pub sb: f64,
    pub s: u32,
    pub sa: u32,
    pub n: u32,
    pub m: f64
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub puzzles: usize,
    pub users: usize,
    pub submissions: usize
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub overall: Vec<OverallRow>,
    pub puzzles: BTreeMap<String, Vec<PuzzleRow>>
}

/// `(new - old)` for the score and rank columns.
pub fn deltas(new_score: f64, new_rank: u32, old: Option<(f64, u32)>) -> (Option<f64>, Option<i64>) {
    match old {
        Some((old_score, old_rank)) => (Some(new_score - old_score), Some(new_rank as i64 - old_rank as i64)),
        None => (None, None)
    }
}
