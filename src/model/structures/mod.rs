pub mod advancement;
pub mod baseline_entry;
pub mod blended_expectation;
pub mod language_popularity;
pub mod language_puzzle_aggregate;
pub mod popularity_basis;
pub mod puzzle_baseline;
pub mod ranked_row;
pub mod report;
pub mod scored_submission;
pub mod submission;
pub mod tie_ranking;
pub mod user_total;
