// src/handlers/leaderboard.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::{Executor, Sqlite, SqlitePool};
use validator::Validate;

use crate::{
    error::AppError,
    extract::AppJson,
    models::leaderboard::{CreateEntryRequest, LeaderboardEntry},
};

/// Appends a leaderboard row. Never updates an existing one, so the same name
/// may appear many times.
pub(crate) async fn insert_entry<'e, E>(
    executor: E,
    name: &str,
    score: i64,
) -> Result<LeaderboardEntry, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let entry = sqlx::query_as::<_, LeaderboardEntry>(
        "INSERT INTO leaderboard (name, score) VALUES (?, ?) RETURNING id, name, score",
    )
    .bind(name)
    .bind(score)
    .fetch_one(executor)
    .await?;

    Ok(entry)
}

/// All entries, highest score first. Equal scores keep insertion order.
pub async fn get_leaderboard(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let entries = sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT id, name, score FROM leaderboard ORDER BY score DESC, id ASC",
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(entries))
}

pub async fn create_entry(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let (Some(name), Some(score)) = (payload.name, payload.score) else {
        return Err(AppError::BadRequest(
            "Missing required fields: name or score".to_string(),
        ));
    };

    let entry = insert_entry(&pool, &name, score).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn delete_entry(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM leaderboard WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Leaderboard entry not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Leaderboard entry deleted" })))
}
