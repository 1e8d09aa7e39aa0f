use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{data::error::DataError, model::structures::submission::Submission};

/// One solution as it appears in the code-golf scores dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSolution {
    pub login: String,
    pub hole: String,
    pub lang: String,
    pub strokes: i64,
    pub submitted: DateTime<FixedOffset>
}

impl TryFrom<RawSolution> for Submission {
    type Error = DataError;

    fn try_from(raw: RawSolution) -> Result<Self, Self::Error> {
        let cost = u32::try_from(raw.strokes)
            .ok()
            .filter(|strokes| *strokes > 0)
            .ok_or_else(|| DataError::InvalidSubmission {
                login: raw.login.clone(),
                hole: raw.hole.clone(),
                lang: raw.lang.clone(),
                strokes: raw.strokes
            })?;

        Ok(Submission {
            puzzle_id: raw.hole,
            user_id: raw.login,
            language_id: raw.lang,
            cost,
            submitted_at: raw.submitted
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        data::{data_structs::RawSolution, error::DataError},
        model::structures::submission::Submission,
        utils::test_utils::timestamp
    };

    fn raw(strokes: i64) -> RawSolution {
        RawSolution {
            login: "alice".to_string(),
            hole: "fizz-buzz".to_string(),
            lang: "python".to_string(),
            strokes,
            submitted: timestamp(0)
        }
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"login":"alice","hole":"fizz-buzz","lang":"python","strokes":56,"submitted":"2024-01-01T00:00:00Z"}"#;
        let solution: RawSolution = serde_json::from_str(json).unwrap();

        assert_eq!(solution, raw(56));
    }

    #[test]
    fn test_into_submission() {
        let submission = Submission::try_from(raw(56)).unwrap();

        assert_eq!(submission.puzzle_id, "fizz-buzz");
        assert_eq!(submission.user_id, "alice");
        assert_eq!(submission.language_id, "python");
        assert_eq!(submission.cost, 56);
    }

    #[test]
    fn test_rejects_non_positive_strokes() {
        assert!(matches!(
            Submission::try_from(raw(0)),
            Err(DataError::InvalidSubmission { strokes: 0, .. })
        ));
        assert!(matches!(
            Submission::try_from(raw(-3)),
            Err(DataError::InvalidSubmission { strokes: -3, .. })
        ));
    }
}
