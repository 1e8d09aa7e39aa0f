use std::{fs::File, io::BufReader, path::Path};

use crate::{
    data::{data_structs::RawSolution, error::DataError},
    model::structures::submission::Submission
};

/// Reads a JSON array of solutions from `path`.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source
    })?;

    let raw: Vec<RawSolution> = serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source
    })?;

    raw.into_iter().map(Submission::try_from).collect()
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use crate::data::{error::DataError, loader::load_submissions};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bayesian-golf-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();

        path
    }

    #[test]
    fn test_load_submissions() {
        let path = temp_file(
            "load.json",
            r#"[
                {"login":"alice","hole":"fizz-buzz","lang":"python","strokes":56,"submitted":"2024-01-01T00:00:00Z"},
                {"login":"bob","hole":"fizz-buzz","lang":"j","strokes":31,"submitted":"2024-02-01T12:30:00+01:00"}
            ]"#
        );

        let submissions = load_submissions(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[1].user_id, "bob");
        assert_eq!(submissions[1].cost, 31);
    }

    #[test]
    fn test_missing_file() {
        let result = load_submissions(&PathBuf::from("/nonexistent/solutions.json"));

        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let path = temp_file("malformed.json", r#"[{"login":"alice"}]"#);

        let result = load_submissions(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DataError::Json { .. })));
    }

    #[test]
    fn test_invalid_strokes() {
        let path = temp_file(
            "invalid.json",
            r#"[{"login":"alice","hole":"fizz-buzz","lang":"python","strokes":0,"submitted":"2024-01-01T00:00:00Z"}]"#
        );

        let result = load_submissions(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DataError::InvalidSubmission { .. })));
    }
}
