// src/handlers/chat_log.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    extract::AppJson,
    models::chat_log::{ChatLog, CreateChatLogRequest},
};

/// Records one question/response exchange. Append-only.
pub async fn create_chat_log(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateChatLogRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let (Some(question), Some(response)) = (payload.question, payload.response) else {
        return Err(AppError::BadRequest(
            "Question and response are required".to_string(),
        ));
    };

    let log = sqlx::query_as::<_, ChatLog>(
        "INSERT INTO chat_logs (question, response) VALUES (?, ?) RETURNING id, question, response, created_at",
    )
    .bind(&question)
    .bind(&response)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to record chat log: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// Newest first.
pub async fn list_chat_logs(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let logs = sqlx::query_as::<_, ChatLog>(
        "SELECT id, question, response, created_at FROM chat_logs ORDER BY id DESC",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(logs))
}

pub async fn get_chat_log(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let log = sqlx::query_as::<_, ChatLog>(
        "SELECT id, question, response, created_at FROM chat_logs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Chat log not found".to_string()))?;

    Ok(Json(log))
}
