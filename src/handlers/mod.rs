// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod chat_log;
pub mod deck;
pub mod flashcard;
pub mod grade_log;
pub mod import;
pub mod leaderboard;
pub mod profile;
pub mod quiz;
pub mod study_log;
pub mod tips;

use axum::{Json, response::IntoResponse};

/// Liveness check.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "API is working!" }))
}
