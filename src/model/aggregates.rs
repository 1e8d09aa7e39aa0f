use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use tracing::debug;

use crate::{
    config::ScoringConfig,
    model::{
        constants::MINIMUM_POPULARITY,
        error::{Result, ScoringError},
        structures::{
            language_popularity::LanguagePopularity, language_puzzle_aggregate::LanguagePuzzleAggregate,
            popularity_basis::PopularityBasis, puzzle_baseline::PuzzleBaseline, submission::Submission
        }
    }
};

/// Keeps the best submission per (puzzle, user, language): lowest cost, then earliest.
/// The result is ordered by that key.
pub fn deduplicate(submissions: &[Submission]) -> Result<Vec<Submission>> {
    let mut best: HashMap<(&str, &str, &str), &Submission> = HashMap::new();

    for s in submissions {
        if s.cost == 0 {
            return Err(ScoringError::InvalidCost {
                puzzle: s.puzzle_id.clone(),
                user: s.user_id.clone(),
                language: s.language_id.clone()
            });
        }

        best.entry(s.key())
            .and_modify(|current| {
                if s.is_better_than(*current) {
                    *current = s;
                }
            })
            .or_insert(s);
    }

    Ok(best
        .into_values()
        .sorted_by(|a, b| a.key().cmp(&b.key()))
        .cloned()
        .collect())
}

/// Everything the shrinkage scorer reads, derived from one submission set.
///
/// Never updated in place: a changed submission set means a new `Aggregates`.
#[derive(Debug, Clone)]
pub struct Aggregates {
    submissions: Vec<Submission>,
    // language -> puzzle -> aggregate
    pairs: HashMap<String, HashMap<String, LanguagePuzzleAggregate>>,
    popularity: HashMap<String, LanguagePopularity>,
    baselines: BTreeMap<String, PuzzleBaseline>,
    // puzzle -> indices into `submissions`
    puzzle_index: BTreeMap<String, Vec<usize>>
}

impl Aggregates {
    pub fn build(submissions: &[Submission], config: &ScoringConfig) -> Result<Aggregates> {
        let submissions = deduplicate(submissions)?;
        if submissions.is_empty() {
            return Err(ScoringError::InsufficientData);
        }

        let pairs = Self::pair_aggregates(&submissions);
        let popularity = Self::language_popularity(&submissions, config.popularity_basis, config.popularity_spread);
        let baselines = Self::puzzle_baselines(&submissions);

        let mut puzzle_index: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, s) in submissions.iter().enumerate() {
            puzzle_index.entry(s.puzzle_id.clone()).or_default().push(i);
        }

        debug!(
            "Built aggregates for {} submissions, {} languages, {} puzzles",
            submissions.len(),
            popularity.len(),
            baselines.len()
        );

        Ok(Aggregates {
            submissions,
            pairs,
            popularity,
            baselines,
            puzzle_index
        })
    }

    fn pair_aggregates(submissions: &[Submission]) -> HashMap<String, HashMap<String, LanguagePuzzleAggregate>> {
        let mut pairs: HashMap<String, HashMap<String, LanguagePuzzleAggregate>> = HashMap::new();

        // Submissions are unique per (puzzle, user, language), so every row is a distinct user
        for s in submissions {
            pairs
                .entry(s.language_id.clone())
                .or_default()
                .entry(s.puzzle_id.clone())
                .and_modify(|agg| {
                    agg.n += 1;
                    agg.s = agg.s.min(s.cost);
                })
                .or_insert_with(|| LanguagePuzzleAggregate {
                    language_id: s.language_id.clone(),
                    puzzle_id: s.puzzle_id.clone(),
                    n: 1,
                    s: s.cost
                });
        }

        pairs
    }

    /// `M = spread * N_lang / N_max + 1`. Only the value of `N_max` matters, so ties
    /// for the most used language need no tie-break.
    fn language_popularity(
        submissions: &[Submission],
        basis: PopularityBasis,
        spread: f64
    ) -> HashMap<String, LanguagePopularity> {
        let usage: HashMap<&str, u32> = match basis {
            PopularityBasis::Breadth => {
                let mut puzzles: HashMap<&str, HashSet<&str>> = HashMap::new();
                for s in submissions {
                    puzzles.entry(s.language_id.as_str()).or_default().insert(s.puzzle_id.as_str());
                }

                puzzles
                    .into_iter()
                    .map(|(language, set)| (language, set.len() as u32))
                    .collect()
            }
            PopularityBasis::Solutions => submissions
                .iter()
                .counts_by(|s| s.language_id.as_str())
                .into_iter()
                .map(|(language, count)| (language, count as u32))
                .collect()
        };

        let n_max = usage.values().copied().max().unwrap_or(1).max(1) as f64;

        usage
            .into_iter()
            .map(|(language, n_lang)| {
                (language.to_string(), LanguagePopularity {
                    language_id: language.to_string(),
                    usage: n_lang,
                    m: spread * n_lang as f64 / n_max + MINIMUM_POPULARITY
                })
            })
            .collect()
    }

    fn puzzle_baselines(submissions: &[Submission]) -> BTreeMap<String, PuzzleBaseline> {
        let mut baselines: BTreeMap<String, PuzzleBaseline> = BTreeMap::new();

        for s in submissions {
            baselines
                .entry(s.puzzle_id.clone())
                .and_modify(|b| b.sa = b.sa.min(s.cost))
                .or_insert_with(|| PuzzleBaseline {
                    puzzle_id: s.puzzle_id.clone(),
                    sa: s.cost
                });
        }

        baselines
    }

    /// The deduplicated submissions, ordered by (puzzle, user, language).
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn submissions_for(&self, puzzle_id: &str) -> Option<Vec<&Submission>> {
        self.puzzle_index
            .get(puzzle_id)
            .map(|indices| indices.iter().map(|i| &self.submissions[*i]).collect())
    }

    pub fn pair(&self, language_id: &str, puzzle_id: &str) -> Option<&LanguagePuzzleAggregate> {
        self.pairs.get(language_id).and_then(|puzzles| puzzles.get(puzzle_id))
    }

    pub fn popularity(&self, language_id: &str) -> Option<&LanguagePopularity> {
        self.popularity.get(language_id)
    }

    pub fn baseline(&self, puzzle_id: &str) -> Option<&PuzzleBaseline> {
        self.baselines.get(puzzle_id)
    }

    /// Puzzle ids in sorted order.
    pub fn puzzles(&self) -> impl Iterator<Item = &str> {
        self.baselines.keys().map(|k| k.as_str())
    }

    pub fn puzzle_count(&self) -> usize {
        self.baselines.len()
    }

    pub fn language_count(&self) -> usize {
        self.popularity.len()
    }

    pub fn user_count(&self) -> usize {
        self.submissions.iter().map(|s| s.user_id.as_str()).unique().count()
    }
}
