// src/handlers/flashcard.rs

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
        flashcard::{CreateFlashcardRequest, Flashcard, UpdateFlashcardRequest},
        user::User,
    },
};

const COLUMNS: &str = "id, title, content, user_id, deck_id";

/// Checks that `deck_id` names an existing deck.
async fn ensure_deck_exists(pool: &SqlitePool, deck_id: i64) -> Result<(), AppError> {
    sqlx::query("SELECT id FROM decks WHERE id = ?")
        .bind(deck_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Deck not found".to_string()))?;
    Ok(())
}

/// Create a new flashcard owned by the current user.
pub async fn create_flashcard(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<CreateFlashcardRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let title = require(payload.title, "title")?;
    let content = require(payload.content, "content")?;

    if let Some(deck_id) = payload.deck_id {
        ensure_deck_exists(&pool, deck_id).await?;
    }

    let card = sqlx::query_as::<_, Flashcard>(&format!(
        "INSERT INTO flashcards (title, content, user_id, deck_id) VALUES (?, ?, ?, ?) RETURNING {}",
        COLUMNS
    ))
    .bind(&title)
    .bind(&content)
    .bind(user.id)
    .bind(payload.deck_id)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create flashcard: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// List the current user's flashcards.
pub async fn list_flashcards(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let cards = sqlx::query_as::<_, Flashcard>(&format!(
        "SELECT {} FROM flashcards WHERE user_id = ? ORDER BY id",
        COLUMNS
    ))
    .bind(user.id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(cards))
}

/// Partially update a flashcard. Cards of other users are reported as not found.
pub async fn update_flashcard(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<UpdateFlashcardRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let id = require(payload.id, "id")?;

    if let Some(Some(deck_id)) = payload.deck_id {
        ensure_deck_exists(&pool, deck_id).await?;
    }

    let mut tx = pool.begin().await?;

    let mut card = sqlx::query_as::<_, Flashcard>(&format!(
        "SELECT {} FROM flashcards WHERE id = ? AND user_id = ?",
        COLUMNS
    ))
    .bind(id)
    .bind(user.id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound("Flashcard not found or unauthorized".to_string()))?;

    card.apply(payload);

    let card = sqlx::query_as::<_, Flashcard>(&format!(
        "UPDATE flashcards SET title = ?, content = ?, deck_id = ? WHERE id = ? RETURNING {}",
        COLUMNS
    ))
    .bind(&card.title)
    .bind(&card.content)
    .bind(card.deck_id)
    .bind(card.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update flashcard: {:?}", e);
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(Json(card))
}

/// Delete one of the current user's flashcards (`?id=`).
pub async fn delete_flashcard(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = require(params.id, "id")?;

    let result = sqlx::query("DELETE FROM flashcards WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user.id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete flashcard: {:?}", e);
            AppError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Flashcard not found or unauthorized".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({ "message": "Flashcard deleted" })))
}
