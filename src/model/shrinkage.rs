use crate::{
    config::ScoringConfig,
    model::{
        aggregates::Aggregates,
        error::{Result, ScoringError},
        structures::{
            blended_expectation::BlendedExpectation, scored_submission::ScoredSubmission, submission::Submission
        }
    }
};

/// `scale * sb / cost`
pub fn score_for_cost(score_scale: f64, sb: f64, cost: f64) -> f64 {
    score_scale * sb / cost
}

/// Scores submissions against the blended expectation of their language on their puzzle.
pub struct ShrinkageScorer<'a> {
    aggregates: &'a Aggregates,
    score_scale: f64
}

impl<'a> ShrinkageScorer<'a> {
    pub fn new(aggregates: &'a Aggregates, config: &ScoringConfig) -> ShrinkageScorer<'a> {
        ShrinkageScorer {
            aggregates,
            score_scale: config.score_scale
        }
    }

    /// Looks up (N, M, S) for the pair and Sa for the puzzle and blends them.
    /// Fails with `UnknownPair` if nobody solved the puzzle in this language.
    pub fn blend(&self, language_id: &str, puzzle_id: &str) -> Result<BlendedExpectation> {
        let unknown_pair = || ScoringError::UnknownPair {
            language: language_id.to_string(),
            puzzle: puzzle_id.to_string()
        };

        let pair = self.aggregates.pair(language_id, puzzle_id).ok_or_else(unknown_pair)?;
        let popularity = self.aggregates.popularity(language_id).ok_or_else(unknown_pair)?;
        let baseline = self
            .aggregates
            .baseline(puzzle_id)
            .ok_or_else(|| ScoringError::UnknownPuzzle {
                puzzle: puzzle_id.to_string()
            })?;

        Ok(BlendedExpectation::new(pair.n, popularity.m, pair.s, baseline.sa))
    }

    pub fn score(&self, submission: &Submission) -> Result<ScoredSubmission> {
        if submission.cost == 0 {
            return Err(ScoringError::InvalidCost {
                puzzle: submission.puzzle_id.clone(),
                user: submission.user_id.clone(),
                language: submission.language_id.clone()
            });
        }

        let expectation = self.blend(&submission.language_id, &submission.puzzle_id)?;

        Ok(ScoredSubmission {
            puzzle_id: submission.puzzle_id.clone(),
            user_id: submission.user_id.clone(),
            language_id: submission.language_id.clone(),
            cost: submission.cost,
            submitted_at: submission.submitted_at,
            expectation,
            score: score_for_cost(self.score_scale, expectation.sb, submission.cost as f64)
        })
    }

    /// Scores every deduplicated submission.
    pub fn score_all(&self) -> Result<Vec<ScoredSubmission>> {
        self.aggregates.submissions().iter().map(|s| self.score(s)).collect()
    }

    pub fn score_puzzle(&self, puzzle_id: &str) -> Result<Vec<ScoredSubmission>> {
        let submissions = self
            .aggregates
            .submissions_for(puzzle_id)
            .ok_or_else(|| ScoringError::UnknownPuzzle {
                puzzle: puzzle_id.to_string()
            })?;

        submissions.into_iter().map(|s| self.score(s)).collect()
    }
}
