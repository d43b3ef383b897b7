// src/models/mod.rs

pub mod chat_log;
pub mod deck;
pub mod flashcard;
pub mod grade_log;
pub mod leaderboard;
pub mod profile;
pub mod question;
pub mod study_log;
pub mod user;

use serde::Deserialize;

/// `?id=` query parameter used by the owner-scoped DELETE endpoints.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<i64>,
}
