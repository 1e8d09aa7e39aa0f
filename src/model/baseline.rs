use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::model::{
    constants::BASELINE_SCALE,
    rank_compactor::competition_ranks,
    structures::{baseline_entry::BaselineEntry, submission::Submission}
};

/// Scores and ranks under the currently deployed rank-fraction method, kept for
/// comparison against the shrinkage scores.
#[derive(Debug, Clone, Default)]
pub struct BaselineSnapshot {
    overall: HashMap<String, BaselineEntry>,
    // puzzle -> user -> one entry per language
    per_puzzle: HashMap<String, HashMap<String, Vec<BaselineEntry>>>
}

/// `round((count - rank + 1) * scale / count)`, rounding half away from zero
pub fn rank_fraction_points(count: usize, cost_rank: u32) -> f64 {
    let count = count as f64;

    ((count - cost_rank as f64 + 1.0) * BASELINE_SCALE / count).round()
}

/// Scores one puzzle's entries. Returns `(entry, points, rank)` ordered by points
/// descending, then cost ascending.
fn score_puzzle<'a>(mut entries: Vec<&'a Submission>) -> Vec<(&'a Submission, f64, u32)> {
    entries.sort_by(|a, b| {
        a.cost
            .cmp(&b.cost)
            .then(a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.user_id.cmp(&b.user_id))
            .then_with(|| a.language_id.cmp(&b.language_id))
    });

    let count = entries.len();
    let cost_ranks = competition_ranks(&entries, |a, b| a.cost.cmp(&b.cost));
    let points: Vec<(&Submission, f64)> = entries
        .into_iter()
        .zip(cost_ranks)
        .map(|(entry, rank)| (entry, rank_fraction_points(count, rank)))
        .collect();

    // Points never increase with cost, so the cost order is already the display order
    let ranks = competition_ranks(&points, |a, b| b.1.total_cmp(&a.1).then(a.0.cost.cmp(&b.0.cost)));

    points
        .into_iter()
        .zip(ranks)
        .map(|((entry, points), rank)| (entry, points, rank))
        .collect()
}

impl BaselineSnapshot {
    /// Builds the snapshot from deduplicated submissions (one per puzzle, user and language).
    pub fn rank_fraction(submissions: &[Submission]) -> BaselineSnapshot {
        let by_puzzle: HashMap<&str, Vec<&Submission>> = submissions
            .iter()
            .map(|s| (s.puzzle_id.as_str(), s))
            .into_group_map();

        let mut per_puzzle: HashMap<String, HashMap<String, Vec<BaselineEntry>>> = HashMap::new();
        for (puzzle, entries) in &by_puzzle {
            let users = per_puzzle.entry(puzzle.to_string()).or_default();

            for (entry, points, rank) in score_puzzle(entries.clone()) {
                users.entry(entry.user_id.clone()).or_default().push(BaselineEntry {
                    user_id: entry.user_id.clone(),
                    language_id: Some(entry.language_id.clone()),
                    points,
                    rank,
                    puzzles: 1,
                    cost: entry.cost as u64
                });
            }
        }

        let overall = Self::overall_entries(&by_puzzle);

        debug!(
            "Built rank-fraction baseline for {} puzzles and {} users",
            per_puzzle.len(),
            overall.len()
        );

        BaselineSnapshot { overall, per_puzzle }
    }

    /// Keeps each user's best entry per puzzle across languages, scores the puzzles
    /// again on those alone, then sums per user.
    fn overall_entries(by_puzzle: &HashMap<&str, Vec<&Submission>>) -> HashMap<String, BaselineEntry> {
        let mut totals: HashMap<&str, BaselineEntry> = HashMap::new();

        for entries in by_puzzle.values() {
            let mut best: HashMap<&str, &Submission> = HashMap::new();
            for &s in entries {
                best.entry(s.user_id.as_str())
                    .and_modify(|current| {
                        if s.is_better_than(*current) {
                            *current = s;
                        }
                    })
                    .or_insert(s);
            }

            for (entry, points, _) in score_puzzle(best.into_values().collect()) {
                let total = totals.entry(entry.user_id.as_str()).or_insert_with(|| BaselineEntry {
                    user_id: entry.user_id.clone(),
                    language_id: None,
                    points: 0.0,
                    rank: 0,
                    puzzles: 0,
                    cost: 0
                });

                total.points += points;
                total.puzzles += 1;
                total.cost += entry.cost as u64;
            }
        }

        let mut ordered: Vec<BaselineEntry> = totals.into_values().collect();
        ordered.sort_by(|a, b| {
            b.points
                .total_cmp(&a.points)
                .then(a.cost.cmp(&b.cost))
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        let ranks = competition_ranks(&ordered, |a, b| b.points.total_cmp(&a.points).then(a.cost.cmp(&b.cost)));

        ordered
            .into_iter()
            .zip(ranks)
            .map(|(mut entry, rank)| {
                entry.rank = rank;
                (entry.user_id.clone(), entry)
            })
            .collect()
    }

    pub fn overall(&self, user_id: &str) -> Option<&BaselineEntry> {
        self.overall.get(user_id)
    }

    pub fn puzzle_entry(&self, puzzle_id: &str, user_id: &str, language_id: &str) -> Option<&BaselineEntry> {
        self.per_puzzle
            .get(puzzle_id)
            .and_then(|users| users.get(user_id))
            .and_then(|entries| {
                entries
                    .iter()
                    .find(|e| e.language_id.as_deref() == Some(language_id))
            })
    }

    pub fn user_count(&self) -> usize {
        self.overall.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overall.is_empty()
    }
}
