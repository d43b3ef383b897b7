// src/models/chat_log.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'chat_logs' table: an append-only record of an AI exchange.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ChatLog {
    pub id: i64,
    pub question: String,
    pub response: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateChatLogRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "Question must be between 1 and 500 characters."
    ))]
    pub question: Option<String>,
    #[validate(length(
        min = 1,
        max = 2000,
        message = "Response must be between 1 and 2000 characters."
    ))]
    pub response: Option<String>,
}
