use thiserror::Error;

/// Runtime invariants checked while building leaderboards. Any of these means the input
/// data is inconsistent or the closed-form inverse is wrong for this case.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvariantError {
    #[error("no populated rank above rank {rank}")]
    RankTableExhausted { rank: u32 },

    #[error("cost {cost} is not above the puzzle record {sa}")]
    CostNotAboveRecord { cost: u32, sa: u32 },

    #[error("{to_rank_up} strokes scores {achieved}, below the target {target}")]
    SelfCheckFailed { to_rank_up: u32, achieved: f64, target: f64 },

    #[error("baseline reports {baseline_puzzles} puzzles / {baseline_cost} strokes, rollup has {puzzles} / {cost}")]
    BaselineMismatch {
        baseline_puzzles: u32,
        baseline_cost: u64,
        puzzles: u32,
        cost: u64
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("no submissions to score")]
    InsufficientData,

    #[error("no submissions for language {language} on puzzle {puzzle}")]
    UnknownPair { language: String, puzzle: String },

    #[error("no submissions for puzzle {puzzle}")]
    UnknownPuzzle { puzzle: String },

    #[error("submission by {user} in {language} on {puzzle} has zero cost")]
    InvalidCost { puzzle: String, user: String, language: String },

    #[error("invariant violated for {user} ({language}) on {puzzle}: {source}")]
    InvariantViolation {
        puzzle: String,
        user: String,
        language: String,
        #[source]
        source: InvariantError
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
