// src/handlers/profile.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::{SqlitePool, types::Json as SqlJson};
use validator::Validate;

use crate::{
    error::{AppError, require},
    extract::AppJson,
    models::{
        profile::{CreateProfileRequest, Profile, UpdateProfileRequest, normalize_classes},
        user::User,
    },
};

const COLUMNS: &str = "id, name, classes, favorite_class, favorite_flashcard, grade, user_id";

async fn fetch_profile(pool: &SqlitePool, id: i64) -> Result<Profile, AppError> {
    sqlx::query_as::<_, Profile>(&format!("SELECT {} FROM profiles WHERE id = ?", COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Profile not found".to_string()))
}

/// Lists all profiles.
pub async fn list_profiles(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let profiles = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {} FROM profiles ORDER BY id",
        COLUMNS
    ))
    .fetch_all(&pool)
    .await?;

    Ok(Json(profiles))
}

pub async fn get_profile(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(fetch_profile(&pool, id).await?))
}

/// Creates a profile linked to the current user.
pub async fn create_profile(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<CreateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let name = require(payload.name, "name")?;
    let classes = normalize_classes(require(payload.classes, "classes")?);

    let profile = sqlx::query_as::<_, Profile>(&format!(
        r#"
        INSERT INTO profiles (name, classes, favorite_class, favorite_flashcard, grade, user_id)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        COLUMNS
    ))
    .bind(&name)
    .bind(SqlJson(classes))
    .bind(payload.favorite_class)
    .bind(payload.favorite_flashcard)
    .bind(payload.grade)
    .bind(user.id)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create profile: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Partially updates a profile.
pub async fn update_profile(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut tx = pool.begin().await?;

    let mut profile = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {} FROM profiles WHERE id = ?",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound("Profile not found".to_string()))?;

    profile.apply(payload);

    let profile = sqlx::query_as::<_, Profile>(&format!(
        r#"
        UPDATE profiles
        SET name = ?, classes = ?, favorite_class = ?, favorite_flashcard = ?, grade = ?
        WHERE id = ?
        RETURNING {}
        "#,
        COLUMNS
    ))
    .bind(&profile.name)
    .bind(&profile.classes)
    .bind(&profile.favorite_class)
    .bind(&profile.favorite_flashcard)
    .bind(&profile.grade)
    .bind(profile.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update profile: {:?}", e);
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(Json(profile))
}

pub async fn delete_profile(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Profile deleted" })))
}
