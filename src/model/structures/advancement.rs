use serde::Serialize;

/// What a submission needs in order to reach the next distinct rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "strokes")]
pub enum Advancement {
    /// Highest cost that still reaches the target score
    Strokes(u32),
    /// No finite cost reaches the target under the shrinkage model
    Unreachable
}

impl Advancement {
    pub fn strokes(&self) -> Option<u32> {
        match self {
            Advancement::Strokes(s) => Some(*s),
            Advancement::Unreachable => None
        }
    }
}
