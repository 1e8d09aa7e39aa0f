use serde::Serialize;

/// Per (language, puzzle) statistics, rebuilt from the submission set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguagePuzzleAggregate {
    pub language_id: String,
    pub puzzle_id: String,
    /// Number of distinct users who solved the puzzle in this language
    pub n: u32,
    /// Minimum cost among them
    pub s: u32
}
