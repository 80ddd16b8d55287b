// src/models/submission.rs

use std::collections::{HashMap, HashSet};

use crate::error::AppError;

const STUDENT_NAME_FIELD: &str = "student_name";
const QUESTION_FIELD_PREFIX: &str = "question_";

/// A parsed test submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Stored exactly as submitted, empty included.
    pub student_name: String,

    /// Key: Question ID
    /// Value: selected option, 0-based
    pub answers: HashMap<i64, i64>,
}

impl Submission {
    /// Builds a submission from raw form fields.
    ///
    /// `question_<id>` fields carry a 1-based option index. A field whose id or
    /// value does not parse is dropped on its own; the rest of the form is still
    /// graded. When a field name repeats, only its first value is read, even if
    /// that value is malformed. Distinct keys naming the same question id
    /// (`question_1`, `question_01`) resolve to the last one. Unrelated fields
    /// are ignored.
    pub fn from_form<I>(fields: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut student_name = None;
        let mut answers = HashMap::new();
        let mut seen_keys = HashSet::new();

        for (key, value) in fields {
            if !seen_keys.insert(key.clone()) {
                continue;
            }
            if key == STUDENT_NAME_FIELD {
                student_name = Some(value);
            } else if let Some(rest) = key.strip_prefix(QUESTION_FIELD_PREFIX) {
                match parse_answer(rest, &value) {
                    Some((question_id, index)) => {
                        answers.insert(question_id, index);
                    }
                    None => tracing::debug!("Discarding malformed answer field {}={}", key, value),
                }
            }
        }

        Ok(Submission {
            student_name: student_name
                .ok_or_else(|| AppError::BadRequest("student_name is required".to_string()))?,
            answers,
        })
    }
}

/// Decodes the id segment of a `question_<id>[_...]` key and a 1-based index value.
fn parse_answer(key_rest: &str, value: &str) -> Option<(i64, i64)> {
    let question_id = key_rest.split('_').next()?.trim().parse::<i64>().ok()?;
    let one_based = value.trim().parse::<i64>().ok()?;
    Some((question_id, one_based.checked_sub(1)?))
}
