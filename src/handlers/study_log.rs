// src/handlers/study_log.rs

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::{AppError, require},
    extract::AppJson,
    models::{
        IdQuery,
        study_log::{CreateStudyLogRequest, StudyLog, UpdateStudyLogRequest},
        user::User,
    },
};

const COLUMNS: &str = "id, user_id, subject, hours_studied, notes, date";

/// Log a new study session for the current user.
pub async fn create_study_log(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<CreateStudyLogRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let (Some(subject), Some(hours)) = (payload.subject, payload.hours) else {
        return Err(AppError::BadRequest("Subject and hours are required".to_string()));
    };

    let log = sqlx::query_as::<_, StudyLog>(&format!(
        "INSERT INTO study_logs (user_id, subject, hours_studied, notes) VALUES (?, ?, ?, ?) RETURNING {}",
        COLUMNS
    ))
    .bind(user.id)
    .bind(&subject)
    .bind(hours)
    .bind(payload.notes.unwrap_or_default())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create study log: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// All study sessions of the current user, oldest first.
pub async fn list_study_logs(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let logs = sqlx::query_as::<_, StudyLog>(&format!(
        "SELECT {} FROM study_logs WHERE user_id = ? ORDER BY date, id",
        COLUMNS
    ))
    .bind(user.id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(logs))
}

/// Partially update a study log owned by the current user.
pub async fn update_study_log(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<UpdateStudyLogRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let id = require(payload.id, "Study Log ID")?;

    let mut tx = pool.begin().await?;

    let mut log = sqlx::query_as::<_, StudyLog>(&format!(
        "SELECT {} FROM study_logs WHERE id = ? AND user_id = ?",
        COLUMNS
    ))
    .bind(id)
    .bind(user.id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound("Study Log not found or unauthorized".to_string()))?;

    log.apply(payload);

    let log = sqlx::query_as::<_, StudyLog>(&format!(
        "UPDATE study_logs SET subject = ?, hours_studied = ?, notes = ? WHERE id = ? RETURNING {}",
        COLUMNS
    ))
    .bind(&log.subject)
    .bind(log.hours_studied)
    .bind(&log.notes)
    .bind(log.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update study log: {:?}", e);
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(Json(log))
}

/// Delete a study log owned by the current user (`?id=`).
pub async fn delete_study_log(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = require(params.id, "Study Log ID")?;

    let result = sqlx::query("DELETE FROM study_logs WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user.id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Study Log not found or unauthorized".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({ "message": "Study Log deleted successfully" })))
}
