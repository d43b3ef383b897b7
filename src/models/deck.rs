// src/models/deck.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::flashcard::Flashcard;

/// Represents the 'decks' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub title: String,
    pub user_id: i64,
}

/// A deck together with its cards, as returned by the single-deck endpoint.
#[derive(Debug, Serialize)]
pub struct DeckWithCards {
    #[serde(flatten)]
    pub deck: Deck,
    pub cards: Vec<Flashcard>,
}

/// A question/answer pair supplied inline when creating a deck.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCard {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Question must be between 1 and 1000 characters."
    ))]
    pub question: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Answer must be between 1 and 1000 characters."
    ))]
    pub answer: String,
}

/// DTO for creating a deck, optionally with its first cards.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeckRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters."))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub cards: Vec<NewCard>,
}

/// DTO for renaming a deck.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDeckRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters."))]
    pub title: Option<String>,
}
