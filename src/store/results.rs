// src/store/results.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::result::{GradedResult, NewResult, ResultRow},
};

/// Append-only history of graded attempts. There is no update or delete.
#[derive(Clone)]
pub struct ResultLedger {
    pool: SqlitePool,
}

impl ResultLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stamps the result with the current UTC time and stores it.
    pub async fn append(&self, result: &NewResult) -> Result<GradedResult, AppError> {
        let timestamp = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO results (student_name, score, total_questions, percentage, level, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&result.student_name)
        .bind(i64::from(result.score))
        .bind(i64::from(result.total_questions))
        .bind(result.percentage)
        .bind(result.level.label())
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to append result: {:?}", e);
            AppError::from(e)
        })?;

        Ok(GradedResult {
            student_name: result.student_name.clone(),
            score: result.score,
            total_questions: result.total_questions,
            percentage: result.percentage,
            level: result.level,
            timestamp,
        })
    }

    /// Every result, newest first. Results stamped in the same instant keep
    /// insertion order reversed.
    pub async fn scan_newest_first(&self) -> Result<Vec<GradedResult>, AppError> {
        self.scan(
            r#"
            SELECT student_name, score, total_questions, percentage, level, timestamp
            FROM results
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .await
    }

    /// Every result, in no particular order.
    pub async fn scan_all(&self) -> Result<Vec<GradedResult>, AppError> {
        self.scan("SELECT student_name, score, total_questions, percentage, level, timestamp FROM results")
            .await
    }

    async fn scan(&self, sql: &str) -> Result<Vec<GradedResult>, AppError> {
        let rows = sqlx::query_as::<_, ResultRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to scan results: {:?}", e);
                AppError::from(e)
            })?;

        rows.into_iter().map(GradedResult::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::level::Level, store::test_support::memory_pool};

    fn new_result(name: &str, score: u32, total: u32, level: Level) -> NewResult {
        NewResult {
            student_name: name.to_string(),
            score,
            total_questions: total,
            percentage: 100.0 * f64::from(score) / f64::from(total),
            level,
        }
    }

    #[tokio::test]
    async fn test_append_then_scan() {
        let ledger = ResultLedger::new(memory_pool().await);
        let stored = ledger
            .append(&new_result("Ada", 7, 10, Level::Intermediate))
            .await
            .unwrap();

        let all = ledger.scan_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].student_name, "Ada");
        assert_eq!(all[0].score, 7);
        assert_eq!(all[0].total_questions, 10);
        assert_eq!(all[0].percentage, 70.0);
        assert_eq!(all[0].level, Level::Intermediate);
        assert_eq!(all[0].timestamp, stored.timestamp);
    }

    #[tokio::test]
    async fn test_scan_newest_first() {
        let ledger = ResultLedger::new(memory_pool().await);
        for name in ["first", "second", "third"] {
            ledger
                .append(&new_result(name, 1, 2, Level::Beginner))
                .await
                .unwrap();
        }

        let names: Vec<String> = ledger
            .scan_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.student_name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_repeat_attempts_are_kept() {
        let ledger = ResultLedger::new(memory_pool().await);
        ledger.append(&new_result("Ada", 1, 2, Level::Beginner)).await.unwrap();
        ledger.append(&new_result("Ada", 2, 2, Level::Advanced)).await.unwrap();

        assert_eq!(ledger.scan_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_stored_level_is_storage_error() {
        let pool = memory_pool().await;
        sqlx::query(
            "INSERT INTO results (student_name, score, total_questions, percentage, level) VALUES ('Ada', 1, 1, 100.0, 'Guru')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = ResultLedger::new(pool).scan_all().await.unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
    }

    #[tokio::test]
    async fn test_legacy_level_labels_scan_and_aggregate() {
        let pool = memory_pool().await;
        for (name, level) in [("Ada", "Продвинутый (Advanced)"), ("Bo", "Начальный (Beginner)")] {
            sqlx::query(
                "INSERT INTO results (student_name, score, total_questions, percentage, level, timestamp) VALUES (?, 1, 1, 100.0, ?, ?)",
            )
            .bind(name)
            .bind(level)
            .bind(Utc::now())
            .execute(&pool)
            .await
            .unwrap();
        }
        let ledger = ResultLedger::new(pool);
        ledger.append(&new_result("Cy", 2, 2, Level::Advanced)).await.unwrap();

        let all = ledger.scan_all().await.unwrap();
        let report = crate::stats::aggregate(&all);
        assert_eq!(report.total_students, 3);
        assert_eq!(report.level_stats[&Level::Advanced].count, 2);
        assert_eq!(report.level_stats[&Level::Beginner].count, 1);

        let newest = ledger.scan_newest_first().await.unwrap();
        assert_eq!(newest[0].student_name, "Cy");
        assert_eq!(newest[2].level, Level::Advanced);
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_storage_error() {
        let pool = memory_pool().await;
        pool.close().await;

        let err = ResultLedger::new(pool)
            .append(&new_result("Ada", 1, 1, Level::Advanced))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
    }
}
