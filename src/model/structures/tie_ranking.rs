use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How ranks are numbered after a group of tied entries.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TieRanking {
    /// 1, 2, 2, 3
    #[default]
    Dense,
    /// 1, 2, 2, 4
    Competition
}

#[cfg(test)]
mod tests {
    use crate::model::structures::tie_ranking::TieRanking;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_dense() {
        assert_eq!(TieRanking::default(), TieRanking::Dense);
    }

    #[test]
    fn test_parse() {
        assert_eq!(TieRanking::from_str("dense"), Ok(TieRanking::Dense));
        assert_eq!(TieRanking::from_str("competition"), Ok(TieRanking::Competition));
        assert!(TieRanking::from_str("olympic").is_err());
    }

    #[test]
    fn test_enumerate() {
        let styles = TieRanking::iter().collect::<Vec<_>>();
        assert_eq!(styles, vec![TieRanking::Dense, TieRanking::Competition]);
    }
}
