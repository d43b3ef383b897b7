// src/models/leaderboard.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'leaderboard' table. Anonymous: no user reference.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub score: i64,
}

/// DTO for posting a score directly.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEntryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters."))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "Score must not be negative."))]
    pub score: Option<i64>,
}
