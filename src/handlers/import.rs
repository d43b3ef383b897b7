// src/handlers/import.rs

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    config::{Config, MAX_IMPORT_AMOUNT},
    error::AppError,
    handlers::deck::insert_deck_with_cards,
    models::user::User,
    utils::trivia::{self, TriviaQuery},
};

/// Query parameters for a trivia import.
#[derive(Debug, Deserialize)]
pub struct ImportParams {
    pub amount: Option<u32>,
    pub difficulty: Option<String>,
    pub category: Option<u32>,
}

impl ImportParams {
    fn into_query(self) -> Result<TriviaQuery, AppError> {
        let amount = self.amount.unwrap_or(10);
        if amount == 0 || amount > MAX_IMPORT_AMOUNT {
            return Err(AppError::BadRequest(format!(
                "amount must be between 1 and {}",
                MAX_IMPORT_AMOUNT
            )));
        }

        let difficulty = match self.difficulty.as_deref() {
            None | Some("") => None,
            Some(d @ ("easy" | "medium" | "hard")) => Some(d.to_string()),
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Unknown difficulty '{}'",
                    other
                )));
            }
        };

        Ok(TriviaQuery {
            amount,
            difficulty,
            category: self.category,
        })
    }
}

/// Imports trivia questions as a new deck of flashcards owned by the caller.
pub async fn import_flashcards(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    State(client): State<reqwest::Client>,
    Extension(user): Extension<User>,
    Query(params): Query<ImportParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query()?;

    let response = trivia::fetch(&client, &config.trivia_api_url, &query).await?;
    let cards: Vec<(String, String)> = trivia::to_cards(&response.results)
        .into_iter()
        .map(|c| (c.question, c.answer))
        .collect();

    if cards.is_empty() {
        return Err(AppError::InternalServerError(
            "Trivia API returned no usable questions".to_string(),
        ));
    }

    let title = trivia::deck_title(&response.results);

    let mut tx = pool.begin().await?;
    let (deck, flashcards) = insert_deck_with_cards(&mut tx, user.id, &title, &cards)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store imported flashcards: {:?}", e);
            e
        })?;
    tx.commit().await?;

    tracing::info!(deck_id = deck.id, count = flashcards.len(), "Flashcards imported");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!("{} flashcards imported successfully!", flashcards.len()),
            "deck": deck,
            "flashcards": flashcards,
        })),
    ))
}
