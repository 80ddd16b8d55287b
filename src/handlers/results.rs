// src/handlers/results.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{error::AppError, stats, store::ResultLedger};

/// Lists every graded result, newest first.
pub async fn list_results(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let results = ResultLedger::new(pool).scan_newest_first().await?;
    Ok(Json(results))
}

/// Per-level counts and shares over all recorded results.
pub async fn get_statistics(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let results = ResultLedger::new(pool).scan_all().await?;
    Ok(Json(stats::aggregate(&results)))
}
