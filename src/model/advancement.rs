use tracing::debug;

use crate::{
    config::ScoringConfig,
    model::{
        error::InvariantError,
        rank_compactor::RankTable,
        shrinkage::score_for_cost,
        structures::{
            advancement::Advancement, blended_expectation::BlendedExpectation, scored_submission::ScoredSubmission
        },
        tolerance::{floor_with_tolerance, is_close}
    }
};

/// Computes how many strokes a submission needs to reach the next distinct rank.
pub struct AdvancementSolver {
    score_scale: f64,
    tolerance: f64
}

impl AdvancementSolver {
    pub fn new(config: &ScoringConfig) -> AdvancementSolver {
        AdvancementSolver {
            score_scale: config.score_scale,
            tolerance: config.relative_tolerance
        }
    }

    /// # Strokes to rank up
    ///
    /// Finds the largest cost at which `entry` would score at least as much as the
    /// next populated rank above `rank`. Returns `None` for rank 1.
    ///
    /// - If `entry` is not its language's record holder, lowering its cost leaves
    ///     `sb` untouched and the answer is `scale * sb / target`.
    /// - If it is, lowering its cost lowers `s` and therefore `sb`. Solving
    ///     `scale * sb(x) = target * x` gives `x = scale * sa * m / (target * (n + m) - scale * n)`.
    ///     A non-positive denominator means no finite cost gets there.
    ///
    /// Every answer is re-scored before it is returned; an answer that does not
    /// reach the target is an error, never a result.
    pub fn strokes_to_rank_up(
        &self,
        entry: &ScoredSubmission,
        rank: u32,
        table: &RankTable
    ) -> Result<Option<Advancement>, InvariantError> {
        if rank <= 1 {
            return Ok(None);
        }

        let target_rank = Self::target_rank(rank, table)?;
        let target_score = table
            .score_for_rank(target_rank)
            .ok_or(InvariantError::RankTableExhausted { rank })?;

        let e = entry.expectation;
        if entry.cost <= e.sa {
            return Err(InvariantError::CostNotAboveRecord {
                cost: entry.cost,
                sa: e.sa
            });
        }

        let n = e.n as f64;
        let boundary = if entry.is_record_holder() {
            let denominator = target_score * (n + e.m) - self.score_scale * n;
            if denominator <= 0.0 {
                debug!(
                    "{} ({}) cannot reach {:.3} on {}: denominator {}",
                    entry.user_id, entry.language_id, target_score, entry.puzzle_id, denominator
                );
                return Ok(Some(Advancement::Unreachable));
            }

            self.score_scale * e.sa as f64 * e.m / denominator
        } else {
            self.score_scale * e.sb / target_score
        };

        let to_rank_up = floor_with_tolerance(boundary, self.tolerance);
        if !to_rank_up.is_finite() || to_rank_up < 1.0 {
            return Ok(Some(Advancement::Unreachable));
        }
        let to_rank_up = to_rank_up.min(u32::MAX as f64) as u32;

        let achieved = self.achieved_score(&e, to_rank_up);
        if achieved < target_score && !is_close(achieved, target_score, self.tolerance) {
            return Err(InvariantError::SelfCheckFailed {
                to_rank_up,
                achieved,
                target: target_score
            });
        }

        Ok(Some(Advancement::Strokes(to_rank_up)))
    }

    /// Walks up from `rank - 1` to the first populated rank. Ranks can be missing
    /// after ties under competition numbering.
    fn target_rank(rank: u32, table: &RankTable) -> Result<u32, InvariantError> {
        let mut target = rank.saturating_sub(1);

        while target > 0 {
            if table.score_for_rank(target).is_some() {
                return Ok(target);
            }
            target -= 1;
        }

        Err(InvariantError::RankTableExhausted { rank })
    }

    /// The score a submission would get at `cost`, with the language minimum and the
    /// puzzle record both capped at `cost`.
    pub fn achieved_score(&self, e: &BlendedExpectation, cost: u32) -> f64 {
        let x = cost as f64;
        let sb = BlendedExpectation::blend(e.n, e.m, (e.s as f64).min(x), (e.sa as f64).min(x));

        score_for_cost(self.score_scale, sb, x)
    }
}
