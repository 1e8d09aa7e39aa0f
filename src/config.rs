use serde::{Deserialize, Serialize};

use crate::{
    args::Args,
    model::{
        constants::{POPULARITY_SPREAD, RELATIVE_TOLERANCE, SCORE_SCALE},
        structures::{popularity_basis::PopularityBasis, tie_ranking::TieRanking}
    }
};

/// Tunables of the shrinkage scoring engine. The defaults reproduce the proposed
/// scoring method exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score awarded to a submission that matches its blended expectation
    pub score_scale: f64,
    /// `M = popularity_spread * N_lang / N_max + 1`
    pub popularity_spread: f64,
    pub relative_tolerance: f64,
    pub popularity_basis: PopularityBasis,
    pub tie_ranking: TieRanking
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_scale: SCORE_SCALE,
            popularity_spread: POPULARITY_SPREAD,
            relative_tolerance: RELATIVE_TOLERANCE,
            popularity_basis: PopularityBasis::default(),
            tie_ranking: TieRanking::default()
        }
    }
}

impl From<&Args> for ScoringConfig {
    fn from(args: &Args) -> Self {
        Self {
            popularity_basis: args.popularity_basis,
            tie_ranking: args.tie_ranking,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_constants() {
        let config = ScoringConfig::default();

        assert_eq!(config.score_scale, 1000.0);
        assert_eq!(config.popularity_spread, 2.0);
        assert_eq!(config.relative_tolerance, 1e-9);
        assert_eq!(config.tie_ranking, TieRanking::Dense);
        assert_eq!(config.popularity_basis, PopularityBasis::Breadth);
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "bayesian-golf",
            "--input",
            "scores/all.json",
            "--tie-ranking",
            "competition",
            "--popularity-basis",
            "solutions",
            "--log-level",
            "info"
        ]);
        let config = ScoringConfig::from(&args);

        assert_eq!(config.tie_ranking, TieRanking::Competition);
        assert_eq!(config.popularity_basis, PopularityBasis::Solutions);
        assert_eq!(config.score_scale, SCORE_SCALE);
    }
}
