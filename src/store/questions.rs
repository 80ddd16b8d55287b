// src/store/questions.rs

use std::{io::ErrorKind, path::Path};

use sqlx::{SqlitePool, types::Json};

use crate::{
    error::AppError,
    models::question::{Question, QuestionSeed},
};

/// Read access to the question bank, plus the one-time bulk load.
#[derive(Clone)]
pub struct QuestionStore {
    pool: SqlitePool,
}

impl QuestionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// All questions ordered by id.
    pub async fn load_all(&self) -> Result<Vec<Question>, AppError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question_text, options, correct_answer FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load questions: {:?}", e);
            AppError::from(e)
        })?;

        Ok(questions)
    }

    /// Inserts one question and returns its id.
    pub async fn insert(&self, seed: &QuestionSeed) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO questions (question_text, options, correct_answer) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&seed.question)
        .bind(Json(&seed.options))
        .bind(&seed.correct_answer)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Loads the JSON question bank at `path` if the store is empty.
    ///
    /// Returns the number of questions inserted. A missing file is not an
    /// error: it is logged and nothing is loaded. All records go in a single
    /// transaction.
    pub async fn seed_from_file(&self, path: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = path.as_ref();

        if self.count().await? > 0 {
            tracing::info!("Question store already populated, skipping seed");
            return Ok(0);
        }

        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("{} not found, questions will not be loaded", path.display());
                return Ok(0);
            }
            Err(e) => {
                return Err(AppError::StorageError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };
        let seeds: Vec<QuestionSeed> = serde_json::from_str(&raw)?;

        let mut tx = self.pool.begin().await?;
        for seed in &seeds {
            sqlx::query(
                "INSERT INTO questions (question_text, options, correct_answer) VALUES (?, ?, ?)",
            )
            .bind(&seed.question)
            .bind(Json(&seed.options))
            .bind(&seed.correct_answer)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::info!("Loaded {} questions from {}", seeds.len(), path.display());
        Ok(seeds.len())
    }
}
