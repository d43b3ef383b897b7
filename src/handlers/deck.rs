// src/handlers/deck.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::{Sqlite, SqlitePool, Transaction};
use validator::Validate;

use crate::{
    error::{AppError, require},
    extract::AppJson,
    models::{
        deck::{CreateDeckRequest, Deck, DeckWithCards, UpdateDeckRequest},
        flashcard::Flashcard,
        user::User,
    },
};

/// Inserts a deck owned by `user_id` and one flashcard per `(question, answer)` pair.
/// Runs inside the caller's transaction so a failed card rolls back the deck too.
pub(crate) async fn insert_deck_with_cards(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
    title: &str,
    cards: &[(String, String)],
) -> Result<(Deck, Vec<Flashcard>), AppError> {
    let deck = sqlx::query_as::<_, Deck>(
        "INSERT INTO decks (title, user_id) VALUES (?, ?) RETURNING id, title, user_id",
    )
    .bind(title)
    .bind(user_id)
    .fetch_one(&mut **tx)
    .await?;

    let mut created = Vec::with_capacity(cards.len());
    for (question, answer) in cards {
        let card = sqlx::query_as::<_, Flashcard>(
            r#"
            INSERT INTO flashcards (title, content, user_id, deck_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, content, user_id, deck_id
            "#,
        )
        .bind(question)
        .bind(answer)
        .bind(user_id)
        .bind(deck.id)
        .fetch_one(&mut **tx)
        .await?;
        created.push(card);
    }

    Ok((deck, created))
}

/// Creates a deck, optionally with its first cards.
pub async fn create_deck(
    State(pool): State<SqlitePool>,
    Extension(user): Extension<User>,
    AppJson(payload): AppJson<CreateDeckRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let title = require(payload.title, "title")?;

    let cards: Vec<(String, String)> = payload
        .cards
        .into_iter()
        .map(|c| (c.question, c.answer))
        .collect();

    let mut tx = pool.begin().await?;
    let (deck, _) = insert_deck_with_cards(&mut tx, user.id, &title, &cards)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create deck: {:?}", e);
            e
        })?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(deck)))
}

/// Lists every deck.
pub async fn list_decks(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let decks = sqlx::query_as::<_, Deck>("SELECT id, title, user_id FROM decks ORDER BY id")
        .fetch_all(&pool)
        .await?;

    Ok(Json(decks))
}

/// Retrieves a single deck with its cards. Public.
pub async fn get_deck(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deck = sqlx::query_as::<_, Deck>("SELECT id, title, user_id FROM decks WHERE id = ?")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Deck not found".to_string()))?;

    let cards = sqlx::query_as::<_, Flashcard>(
        "SELECT id, title, content, user_id, deck_id FROM flashcards WHERE deck_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(DeckWithCards { deck, cards }))
}

/// Renames a deck. An absent title leaves the deck unchanged.
pub async fn update_deck(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UpdateDeckRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut tx = pool.begin().await?;

    let mut deck = sqlx::query_as::<_, Deck>("SELECT id, title, user_id FROM decks WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound("Deck not found".to_string()))?;

    if let Some(title) = payload.title {
        deck.title = title;
    }

    let deck = sqlx::query_as::<_, Deck>(
        "UPDATE decks SET title = ? WHERE id = ? RETURNING id, title, user_id",
    )
    .bind(&deck.title)
    .bind(deck.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update deck: {:?}", e);
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(Json(deck))
}

/// Deletes a deck and all of its flashcards.
pub async fn delete_deck(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;

    let cards = sqlx::query("DELETE FROM flashcards WHERE deck_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let result = sqlx::query("DELETE FROM decks WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete deck: {:?}", e);
            AppError::from(e)
        })?;

    if result.rows_affected() == 0 {
        // Dropping the transaction rolls back.
        return Err(AppError::NotFound(format!("Deck with ID {} not found", id)));
    }

    tx.commit().await?;
    tracing::info!(deck_id = id, cards, "Deck deleted");

    Ok(Json(serde_json::json!({
        "message": format!("Deck with ID {} deleted successfully", id)
    })))
}
