// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::QUIZ_QUESTION_COUNT,
    error::{AppError, require},
    extract::AppJson,
    handlers::leaderboard::insert_entry,
    models::question::{QuizResult, SubmitQuizRequest},
    utils::quiz::QuestionPool,
};

/// Serves a random APUSH quiz round.
///
/// Questions are drawn without replacement and returned without their answers.
pub async fn generate_quiz(
    State(questions): State<Arc<QuestionPool>>,
) -> Result<impl IntoResponse, AppError> {
    let paper = questions.sample(QUIZ_QUESTION_COUNT)?;
    Ok(Json(paper))
}

/// Grades a submission and appends the result to the leaderboard.
///
/// * One point per exact match with the stored answer.
/// * Unknown question ids are ignored.
/// * Every submission creates a new leaderboard row, even for a repeated name.
pub async fn submit_quiz(
    State(pool): State<SqlitePool>,
    State(questions): State<Arc<QuestionPool>>,
    AppJson(req): AppJson<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let name = require(req.name, "name")?;

    let score = questions.score(&req.answers);

    insert_entry(&pool, &name, score).await.map_err(|e| {
        tracing::error!("Failed to record quiz result: {:?}", e);
        e
    })?;

    tracing::info!(%name, score, answered = req.answers.len(), "Quiz submitted");
    Ok(Json(QuizResult { name, score }))
}
