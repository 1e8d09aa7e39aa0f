use std::collections::BTreeMap;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    config::ScoringConfig,
    model::{
        advancement::AdvancementSolver,
        aggregates::Aggregates,
        baseline::BaselineSnapshot,
        constants::{ALL_LANGUAGES, ALL_PUZZLES},
        error::{InvariantError, Result, ScoringError},
        rank_compactor::{order_scored, order_totals, RankCompactor},
        rollup,
        shrinkage::ShrinkageScorer,
        structures::{
            report::{deltas, OverallRow, PuzzleRow, Report, Summary},
            submission::Submission,
            user_total::UserTotal
        }
    },
    utils::progress_utils::progress_style
};

/// Builds the overall and per-puzzle leaderboards from one submission set.
pub struct ScoringModel {
    config: ScoringConfig,
    aggregates: Aggregates
}

impl ScoringModel {
    /// Deduplicates `submissions` and builds every aggregate up front. Nothing is
    /// scored until this has completed.
    pub fn new(submissions: &[Submission], config: ScoringConfig) -> Result<ScoringModel> {
        let aggregates = Aggregates::build(submissions, &config)?;

        Ok(ScoringModel { config, aggregates })
    }

    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The rank-fraction leaderboard for the same submissions
    pub fn baseline(&self) -> BaselineSnapshot {
        BaselineSnapshot::rank_fraction(self.aggregates.submissions())
    }

    fn scorer(&self) -> ShrinkageScorer<'_> {
        ShrinkageScorer::new(&self.aggregates, &self.config)
    }

    pub fn totals(&self) -> Result<IndexMap<String, UserTotal>> {
        let scored = self.scorer().score_all()?;

        Ok(rollup::totals(&scored))
    }

    /// One row per user, best total first.
    ///
    /// A user found in `baseline` must have solved the same puzzles for the same
    /// strokes there; anything else means the two leaderboards were built from
    /// different data.
    pub fn overall_leaderboard(&self, baseline: &BaselineSnapshot) -> Result<Vec<OverallRow>> {
        let mut totals: Vec<UserTotal> = self.totals()?.into_values().collect();
        order_totals(&mut totals);

        let (ranked, _) = RankCompactor::new(&self.config).rank_totals(&totals);

        totals
            .iter()
            .zip(ranked)
            .map(|(total, row)| {
                let old = match baseline.overall(&total.user_id) {
                    Some(entry) if entry.puzzles != total.puzzle_count || entry.cost != total.cost => {
                        return Err(ScoringError::InvariantViolation {
                            puzzle: ALL_PUZZLES.to_string(),
                            user: total.user_id.clone(),
                            language: ALL_LANGUAGES.to_string(),
                            source: InvariantError::BaselineMismatch {
                                baseline_puzzles: entry.puzzles,
                                baseline_cost: entry.cost,
                                puzzles: total.puzzle_count,
                                cost: total.cost
                            }
                        });
                    }
                    Some(entry) => Some((entry.points, entry.rank)),
                    None => {
                        warn!("{} has no entry on the baseline leaderboard", total.user_id);
                        None
                    }
                };

                let (delta_score, delta_rank) = deltas(row.score, row.rank, old);

                Ok(OverallRow {
                    user_id: total.user_id.clone(),
                    total_score: total.total_score,
                    total_rank: row.rank,
                    old_score: old.map(|(points, _)| points),
                    old_rank: old.map(|(_, rank)| rank),
                    delta_score,
                    delta_rank,
                    cost: total.cost,
                    puzzle_count: total.puzzle_count,
                    cost_per_puzzle: total.cost as f64 / total.puzzle_count as f64
                })
            })
            .collect()
    }

    /// # Puzzle leaderboard
    ///
    /// 1. Score every submission on the puzzle and order them best first.
    /// 2. Compact the scores into ranks.
    /// 3. For every row below rank 1, solve for the strokes needed to reach the next
    ///     populated rank.
    ///
    /// A failed runtime check in step 3 aborts the whole leaderboard.
    pub fn puzzle_leaderboard(&self, puzzle_id: &str, baseline: &BaselineSnapshot) -> Result<Vec<PuzzleRow>> {
        let mut scored = self.scorer().score_puzzle(puzzle_id)?;
        order_scored(&mut scored);

        let (ranked, table) = RankCompactor::new(&self.config).rank_scored(&scored);
        let solver = AdvancementSolver::new(&self.config);

        scored
            .iter()
            .zip(ranked)
            .map(|(entry, row)| -> Result<PuzzleRow> {
                let to_rank_up = solver.strokes_to_rank_up(entry, row.rank, &table).map_err(|source| {
                    ScoringError::InvariantViolation {
                        puzzle: entry.puzzle_id.clone(),
                        user: entry.user_id.clone(),
                        language: entry.language_id.clone(),
                        source
                    }
                })?;

                let old = baseline
                    .puzzle_entry(&entry.puzzle_id, &entry.user_id, &entry.language_id)
                    .map(|e| (e.points, e.rank));
                let (delta_score, delta_rank) = deltas(row.score, row.rank, old);

                let e = entry.expectation;
                Ok(PuzzleRow {
                    user_id: entry.user_id.clone(),
                    language_id: entry.language_id.clone(),
                    cost: entry.cost,
                    new_score: entry.score,
                    new_rank: row.rank,
                    old_score: old.map(|(points, _)| points),
                    old_rank: old.map(|(_, rank)| rank),
                    delta_score,
                    delta_rank,
                    to_rank_up,
                    sb: e.sb,
                    s: e.s,
                    sa: e.sa,
                    n: e.n,
                    m: e.m
                })
            })
            .collect()
    }

    /// Builds the full report. Puzzles are independent of each other and are
    /// processed in parallel.
    pub fn process(&self, baseline: &BaselineSnapshot) -> Result<Report> {
        let overall = self.overall_leaderboard(baseline)?;
        info!("Ranked {} users overall", overall.len());

        let puzzles: Vec<&str> = self.aggregates.puzzles().collect();

        let span = info_span!("puzzle_leaderboards");
        span.pb_set_style(&progress_style());
        span.pb_set_length(puzzles.len() as u64);
        span.pb_set_message("Building puzzle leaderboards");
        let _enter = span.enter();

        let puzzles = puzzles
            .par_iter()
            .map(|puzzle_id| -> Result<(String, Vec<PuzzleRow>)> {
                let rows = self.puzzle_leaderboard(puzzle_id, baseline)?;
                debug!("{}: {} rows", puzzle_id, rows.len());
                span.pb_inc(1);

                Ok((puzzle_id.to_string(), rows))
            })
            .collect::<Result<BTreeMap<String, Vec<PuzzleRow>>>>()?;

        info!("Built {} puzzle leaderboards", puzzles.len());

        Ok(Report {
            summary: Summary {
                puzzles: self.aggregates.puzzle_count(),
                users: self.aggregates.user_count(),
                submissions: self.aggregates.submissions().len()
            },
            overall,
            puzzles
        })
    }
}
