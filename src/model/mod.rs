pub mod advancement;
pub mod aggregates;
pub mod baseline;
pub mod constants;
pub mod error;
pub mod leaderboard;
pub mod rank_compactor;
pub mod rollup;
pub mod shrinkage;
pub mod structures;
pub mod tolerance;
