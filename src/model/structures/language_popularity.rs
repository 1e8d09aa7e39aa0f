use serde::Serialize;

/// Shrinkage strength for a language. `m` is always at least 1; the most used
/// language gets `1 + popularity_spread`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguagePopularity {
    pub language_id: String,
    /// Usage count the strength was derived from (N_lang)
    pub usage: u32,
    pub m: f64
}
