// src/handlers/grade_log.rs

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
        grade_log::{CreateGradeLogRequest, GradeLog, UpdateGradeLogRequest},
        user::User,
    },
};

const COLUMNS: &str = "id, user_id, subject, grade, notes, date";

/// Record a new grade for the current user.
pub async fn create_grade_log(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<CreateGradeLogRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let (Some(subject), Some(grade)) = (payload.subject, payload.grade) else {
        return Err(AppError::BadRequest("Subject and grade are required".to_string()));
    };

    let log = sqlx::query_as::<_, GradeLog>(&format!(
        "INSERT INTO grade_logs (user_id, subject, grade, notes) VALUES (?, ?, ?, ?) RETURNING {}",
        COLUMNS
    ))
    .bind(user.id)
    .bind(&subject)
    .bind(grade)
    .bind(payload.notes.unwrap_or_default())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create grade log: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// All grades recorded by the current user, oldest first.
pub async fn list_grade_logs(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let logs = sqlx::query_as::<_, GradeLog>(&format!(
        "SELECT {} FROM grade_logs WHERE user_id = ? ORDER BY date, id",
        COLUMNS
    ))
    .bind(user.id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(logs))
}

/// Partially update a grade log owned by the current user.
pub async fn update_grade_log(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<UpdateGradeLogRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let id = require(payload.id, "Grade Log ID")?;

    let mut tx = pool.begin().await?;

    let mut log = sqlx::query_as::<_, GradeLog>(&format!(
        "SELECT {} FROM grade_logs WHERE id = ? AND user_id = ?",
        COLUMNS
    ))
    .bind(id)
    .bind(user.id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound("Grade Log not found or unauthorized".to_string()))?;

    log.apply(payload);

    let log = sqlx::query_as::<_, GradeLog>(&format!(
        "UPDATE grade_logs SET subject = ?, grade = ?, notes = ? WHERE id = ? RETURNING {}",
        COLUMNS
    ))
    .bind(&log.subject)
    .bind(log.grade)
    .bind(&log.notes)
    .bind(log.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update grade log: {:?}", e);
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(Json(log))
}

/// Delete a grade log owned by the current user (`?id=`).
pub async fn delete_grade_log(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = require(params.id, "Grade Log ID")?;

    let result = sqlx::query("DELETE FROM grade_logs WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user.id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Grade Log not found or unauthorized".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({ "message": "Grade Log deleted successfully" })))
}
