use serde::Serialize;

/// The all-time record for a puzzle across every language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleBaseline {
    pub puzzle_id: String,
    pub sa: u32
}
