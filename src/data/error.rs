use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },

    #[error("solution by {login} in {lang} on {hole} has {strokes} strokes")]
    InvalidSubmission {
        login: String,
        hole: String,
        lang: String,
        strokes: i64
    }
}
