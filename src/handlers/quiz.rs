// src/handlers/quiz.rs

use axum::{Form, Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    grading,
    models::{question::PublicQuestion, submission::Submission},
    store::{QuestionStore, ResultLedger},
};

/// Returns the full test paper without correct answers.
pub async fn list_questions(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let questions: Vec<PublicQuestion> = QuestionStore::new(pool)
        .load_all()
        .await?
        .into_iter()
        .map(PublicQuestion::from)
        .collect();

    Ok(Json(questions))
}

/// Grades a submitted test and records the result.
///
/// * Expects `student_name` plus `question_<id>` fields holding 1-based option indices.
/// * Grades against every stored question; unanswered ones count as wrong.
/// * Appends the graded result to the ledger.
pub async fn submit_test(
    State(pool): State<SqlitePool>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let submission = Submission::from_form(fields)?;

    let questions = QuestionStore::new(pool.clone()).load_all().await?;
    let grade = grading::grade(&questions, &submission);

    let recorded = ResultLedger::new(pool)
        .append(&grade.into_result(submission.student_name))
        .await?;

    tracing::info!(
        "Recorded result for {}: {}/{} ({})",
        recorded.student_name,
        recorded.score,
        recorded.total_questions,
        recorded.level
    );

    Ok(Json(serde_json::json!({
        "student_name": recorded.student_name,
        "score": recorded.score,
        "total_questions": recorded.total_questions,
        "percentage": recorded.percentage,
        "level": recorded.level,
    })))
}
