use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::model::structures::{scored_submission::ScoredSubmission, user_total::UserTotal};

struct PuzzleBest {
    score: f64,
    cost: u32
}

/// Rolls scored submissions up into one total per user, ordered by user id.
///
/// Within each (user, puzzle) group the best score and the lowest cost are taken
/// independently: a longer solution in a rarer language may outscore the
/// user's shortest one.
pub fn totals(scored: &[ScoredSubmission]) -> IndexMap<String, UserTotal> {
    // Ordered so that every user's scores are summed in the same order on every run
    let mut best: BTreeMap<(&str, &str), PuzzleBest> = BTreeMap::new();

    for s in scored {
        best.entry((s.user_id.as_str(), s.puzzle_id.as_str()))
            .and_modify(|b| {
                b.score = b.score.max(s.score);
                b.cost = b.cost.min(s.cost);
            })
            .or_insert(PuzzleBest {
                score: s.score,
                cost: s.cost
            });
    }

    let mut totals: IndexMap<String, UserTotal> = IndexMap::new();
    for ((user, _), b) in best {
        let total = totals.entry(user.to_string()).or_insert_with(|| UserTotal {
            user_id: user.to_string(),
            total_score: 0.0,
            cost: 0,
            puzzle_count: 0
        });

        total.total_score += b.score;
        total.cost += b.cost as u64;
        total.puzzle_count += 1;
    }

    totals
}
