use std::path::PathBuf;

use clap::Parser;

use crate::model::structures::{popularity_basis::PopularityBasis, tie_ranking::TieRanking};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Bayesian Golf",
    author = "code-golf",
    long_about = "Compares the proposed Bayesian scoring method against the deployed leaderboard"
)]
pub struct Args {
    /// Path to a JSON dump of every solution, formatted like the
    /// all-holes/all-langs/all scores endpoint
    #[arg(short, long, env = "SUBMISSIONS_PATH", help = "Cached submissions file")]
    pub input: PathBuf,

    /// Where the comparison report is written
    #[arg(short, long, env = "REPORT_PATH", default_value = "bayesian.json")]
    pub output: PathBuf,

    /// Numbering used after tied entries
    #[arg(long, value_enum, default_value_t = TieRanking::Dense)]
    pub tie_ranking: TieRanking,

    /// What counts as a language's usage when deriving its shrinkage strength
    #[arg(long, value_enum, default_value_t = PopularityBasis::Breadth)]
    pub popularity_basis: PopularityBasis,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
