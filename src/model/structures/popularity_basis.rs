use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// What is counted as a language's usage (N_lang) when deriving its shrinkage strength.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PopularityBasis {
    /// Distinct puzzles solved in the language
    #[default]
    Breadth,
    /// Deduplicated (puzzle, user) solutions in the language
    Solutions
}
