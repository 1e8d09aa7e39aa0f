use std::{fs, path::PathBuf, sync::Once};

use bayesian_golf::model::structures::submission::Submission;
use serde_json::json;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .try_init();
    });
}

/// A scratch path unique to this process and `name`
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bayesian-golf-it-{}-{}", std::process::id(), name))
}

/// Writes `submissions` in the scores dump format and returns the path
pub fn write_dump(name: &str, submissions: &[Submission]) -> PathBuf {
    let rows: Vec<serde_json::Value> = submissions
        .iter()
        .map(|s| {
            json!({
                "login": s.user_id,
                "hole": s.puzzle_id,
                "lang": s.language_id,
                "strokes": s.cost,
                "submitted": s.submitted_at.to_rfc3339()
            })
        })
        .collect();

    let path = temp_path(name);
    fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

    path
}
