use crate::model::{
    constants::SCORE_SCALE,
    shrinkage::score_for_cost,
    structures::{
        blended_expectation::BlendedExpectation, scored_submission::ScoredSubmission, submission::Submission
    }
};
use chrono::{DateTime, Duration, FixedOffset};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const EPOCH: &str = "2024-01-01T00:00:00+00:00";

/// A fixed point in time, shifted by `offset_minutes`
pub fn timestamp(offset_minutes: i64) -> DateTime<FixedOffset> {
    let epoch = DateTime::parse_from_rfc3339(EPOCH).expect("Expected a valid RFC 3339 epoch");

    epoch + Duration::minutes(offset_minutes)
}

pub fn generate_submission(
    puzzle_id: &str,
    user_id: &str,
    language_id: &str,
    cost: u32,
    offset_minutes: i64
) -> Submission {
    Submission::new(puzzle_id, user_id, language_id, cost, timestamp(offset_minutes))
}

/// Generates a realistic, seeded submission set with at most one submission per
/// (puzzle, user, language).
///
/// Every puzzle has a base length and every language a verbosity factor, so
/// languages differ systematically the way real ones do. The first user solves
/// every puzzle in the first language, so no puzzle or language is ever empty.
pub fn generate_submissions(n_users: usize, n_puzzles: usize, n_languages: usize, seed: u64) -> Vec<Submission> {
    if n_users < 1 || n_puzzles < 1 || n_languages < 1 {
        panic!("Need at least one user, puzzle and language");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let puzzle_lengths: Vec<u32> = (0..n_puzzles).map(|_| rng.random_range(40..240)).collect();
    let verbosity: Vec<f64> = (0..n_languages).map(|_| rng.random_range(0.6..2.5)).collect();
    // Later languages are rarer
    let language_weights: Vec<f64> = (0..n_languages).map(|l| 1.0 / (l as f64 + 1.0)).collect();

    let mut submissions = Vec::new();
    for user in 0..n_users {
        let skill: f64 = rng.random_range(1.0..1.8);

        for (puzzle, length) in puzzle_lengths.iter().enumerate() {
            if user > 0 && !rng.random_bool(0.6) {
                continue;
            }

            for (language, factor) in verbosity.iter().enumerate() {
                let attempts = if user == 0 && language == 0 {
                    true
                } else {
                    rng.random_bool(0.5 * language_weights[language])
                };
                if !attempts {
                    continue;
                }

                let noise: f64 = rng.random_range(0.0..0.3);
                let cost = (*length as f64 * factor * (skill + noise)).round().max(1.0) as u32;

                submissions.push(generate_submission(
                    &format!("hole-{:02}", puzzle),
                    &format!("user-{:03}", user),
                    &format!("lang-{}", language),
                    cost,
                    rng.random_range(0..500_000)
                ));
            }
        }
    }

    submissions
}

/// A scored submission on puzzle `p` with the given score and a trivial expectation.
/// Only useful where the score is all that matters, e.g. ordering and ranking.
pub fn generate_scored_submission(
    user_id: &str,
    language_id: &str,
    cost: u32,
    score: f64,
    offset_minutes: i64
) -> ScoredSubmission {
    ScoredSubmission {
        puzzle_id: "p".to_string(),
        user_id: user_id.to_string(),
        language_id: language_id.to_string(),
        cost,
        submitted_at: timestamp(offset_minutes),
        expectation: BlendedExpectation::new(1, 1.0, cost, cost),
        score
    }
}

/// A scored submission on puzzle `p` whose score follows from the given expectation.
pub fn generate_scored(user_id: &str, language_id: &str, cost: u32, n: u32, m: f64, s: u32, sa: u32) -> ScoredSubmission {
    let expectation = BlendedExpectation::new(n, m, s, sa);

    ScoredSubmission {
        puzzle_id: "p".to_string(),
        user_id: user_id.to_string(),
        language_id: language_id.to_string(),
        cost,
        submitted_at: timestamp(0),
        expectation,
        score: score_for_cost(SCORE_SCALE, expectation.sb, cost as f64)
    }
}
