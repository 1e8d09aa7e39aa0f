use std::{cmp::Ordering, collections::BTreeMap};

use crate::{
    config::ScoringConfig,
    model::{
        structures::{
            ranked_row::RankedRow, scored_submission::ScoredSubmission, tie_ranking::TieRanking,
            user_total::UserTotal
        },
        tolerance::is_close
    }
};

/// Ranks assigned to an ordered list of scores, plus the score held by each populated rank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankTable {
    ranks: Vec<u32>,
    // For a group of tied entries this is the score of the last one in the group
    score_for_rank: BTreeMap<u32, f64>
}

impl RankTable {
    pub fn ranks(&self) -> &[u32] {
        &self.ranks
    }

    pub fn rank(&self, index: usize) -> Option<u32> {
        self.ranks.get(index).copied()
    }

    pub fn score_for_rank(&self, rank: u32) -> Option<f64> {
        self.score_for_rank.get(&rank).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Best score first; then lowest cost; then earliest submission. User and language
/// only make the order total.
pub fn order_scored(entries: &mut [ScoredSubmission]) {
    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.cost.cmp(&b.cost))
            .then(a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.user_id.cmp(&b.user_id))
            .then_with(|| a.language_id.cmp(&b.language_id))
    });
}

/// Best total first; then lowest total cost; then user id.
pub fn order_totals(entries: &mut [UserTotal]) {
    entries.sort_by(|a, b| {
        b.total_score
            .total_cmp(&a.total_score)
            .then(a.cost.cmp(&b.cost))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
}

pub struct RankCompactor {
    style: TieRanking,
    tolerance: f64
}

impl RankCompactor {
    pub fn new(config: &ScoringConfig) -> RankCompactor {
        Self::with_style(config.tie_ranking, config.relative_tolerance)
    }

    pub fn with_style(style: TieRanking, tolerance: f64) -> RankCompactor {
        RankCompactor { style, tolerance }
    }

    /// Assigns ranks to `scores`, which must already be ordered best first.
    ///
    /// An entry whose score is within tolerance of the score last recorded for the
    /// previous rank shares that rank. Otherwise it gets the next rank: the next
    /// integer for [`TieRanking::Dense`], its 1-based position for
    /// [`TieRanking::Competition`].
    pub fn rank(&self, scores: &[f64]) -> RankTable {
        let mut table = RankTable {
            ranks: Vec::with_capacity(scores.len()),
            score_for_rank: BTreeMap::new()
        };
        let mut last_rank: Option<u32> = None;

        for (index, score) in scores.iter().enumerate() {
            let tied_rank = last_rank.filter(|r| {
                table
                    .score_for_rank
                    .get(r)
                    .is_some_and(|previous| is_close(*score, *previous, self.tolerance))
            });

            let rank = match tied_rank {
                Some(r) => r,
                None => match self.style {
                    TieRanking::Dense => last_rank.map_or(1, |r| r + 1),
                    TieRanking::Competition => index as u32 + 1
                }
            };

            table.score_for_rank.insert(rank, *score);
            table.ranks.push(rank);
            last_rank = Some(rank);
        }

        table
    }

    /// Ranks a puzzle's scored submissions. `entries` must be ordered with [`order_scored`].
    pub fn rank_scored(&self, entries: &[ScoredSubmission]) -> (Vec<RankedRow>, RankTable) {
        let scores: Vec<f64> = entries.iter().map(|e| e.score).collect();
        let table = self.rank(&scores);

        let rows = entries
            .iter()
            .zip(table.ranks())
            .map(|(e, rank)| RankedRow {
                user_id: e.user_id.clone(),
                score: e.score,
                rank: *rank
            })
            .collect();

        (rows, table)
    }

    /// Ranks user totals. `entries` must be ordered with [`order_totals`].
    pub fn rank_totals(&self, entries: &[UserTotal]) -> (Vec<RankedRow>, RankTable) {
        let scores: Vec<f64> = entries.iter().map(|e| e.total_score).collect();
        let table = self.rank(&scores);

        let rows = entries
            .iter()
            .zip(table.ranks())
            .map(|(e, rank)| RankedRow {
                user_id: e.user_id.clone(),
                score: e.total_score,
                rank: *rank
            })
            .collect();

        (rows, table)
    }
}

/// Competition rank over an already ordered list: equal keys share the lowest
/// position, the next key skips past them.
pub fn competition_ranks<T, F>(entries: &[T], mut cmp: F) -> Vec<u32>
where
    F: FnMut(&T, &T) -> Ordering
{
    let mut ranks = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let rank = match index {
            0 => 1,
            _ if cmp(&entries[index - 1], entry) == Ordering::Equal => ranks[index - 1],
            _ => index as u32 + 1
        };
        ranks.push(rank);
    }

    ranks
}
