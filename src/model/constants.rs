// Model constants
pub const SCORE_SCALE: f64 = 1000.0;
pub const POPULARITY_SPREAD: f64 = 2.0;
pub const MINIMUM_POPULARITY: f64 = 1.0;
/// Relative tolerance used wherever two scores are compared for equality
pub const RELATIVE_TOLERANCE: f64 = 1e-9;
// Baseline (rank-fraction) model
pub const BASELINE_SCALE: f64 = 1000.0;
// Placeholders used when an overall row is reported in an error
pub const ALL_PUZZLES: &str = "all-puzzles";
pub const ALL_LANGUAGES: &str = "all-langs";
