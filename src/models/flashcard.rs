// src/models/flashcard.rs

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'flashcards' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: i64,
    /// The question side.
    pub title: String,
    /// The answer side.
    pub content: String,
    pub user_id: i64,
    pub deck_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFlashcardRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Title must be between 1 and 1000 characters."
    ))]
    pub title: Option<String>,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Content must be between 1 and 1000 characters."
    ))]
    pub content: Option<String>,
    pub deck_id: Option<i64>,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFlashcardRequest {
    pub id: Option<i64>,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Title must be between 1 and 1000 characters."
    ))]
    pub title: Option<String>,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Content must be between 1 and 1000 characters."
    ))]
    pub content: Option<String>,
    /// Absent keeps the current deck, `null` detaches the card, a number moves it.
    #[serde(default, deserialize_with = "present")]
    pub deck_id: Option<Option<i64>>,
}

/// Wraps any present value, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Flashcard {
    pub fn apply(&mut self, changes: UpdateFlashcardRequest) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(deck_id) = changes.deck_id {
            self.deck_id = deck_id;
        }
    }
}
