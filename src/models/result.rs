// src/models/result.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::{error::AppError, models::level::Level};

/// A graded attempt as stored in the 'results' table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedResult {
    pub student_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub level: Level,
    pub timestamp: DateTime<Utc>,
}

/// A graded attempt before the ledger stamps it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewResult {
    pub student_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub level: Level,
}

/// Raw row of the 'results' table; `level` is still the stored label.
#[derive(Debug, FromRow)]
pub(crate) struct ResultRow {
    pub student_name: String,
    pub score: i64,
    pub total_questions: i64,
    pub percentage: f64,
    pub level: String,
    pub timestamp: DateTime<Utc>,
}

impl TryFrom<ResultRow> for GradedResult {
    type Error = AppError;

    fn try_from(row: ResultRow) -> Result<Self, Self::Error> {
        let level = Level::from_label(&row.level)
            .ok_or_else(|| AppError::StorageError(format!("Unknown level label '{}'", row.level)))?;
        let count = |value: i64, column: &str| {
            u32::try_from(value).map_err(|_| {
                AppError::StorageError(format!("Column {} out of range: {}", column, value))
            })
        };

        Ok(GradedResult {
            student_name: row.student_name,
            score: count(row.score, "score")?,
            total_questions: count(row.total_questions, "total_questions")?,
            percentage: row.percentage,
            level,
            timestamp: row.timestamp,
        })
    }
}
