use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub user_id: String,
    pub score: f64,
    pub rank: u32
}
