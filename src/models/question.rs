// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub question_text: String,

    /// Ordered options, addressed by 0-based index.
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// Text of the correct option (not its index).
    /// If it matches no option the question can never be answered correctly.
    pub correct_answer: String,
}

impl Question {
    /// True when `index` is in range and the option text equals the correct answer.
    /// Duplicate option texts are all accepted.
    pub fn is_correct(&self, index: i64) -> bool {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.options.get(i))
            .is_some_and(|option| *option == self.correct_answer)
    }
}

/// DTO for sending a question to the client (excludes the correct answer).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub question_text: String,
    pub options: Vec<String>,
}

impl From<Question> for PublicQuestion {
    fn from(q: Question) -> Self {
        PublicQuestion {
            id: q.id,
            question_text: q.question_text,
            options: q.options.0,
        }
    }
}

/// One record of the JSON question bank used to seed an empty store.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionSeed {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}
