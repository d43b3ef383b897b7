// tests/import_tests.rs

mod common;

use axum::{Json, Router, extract::Query, routing::get};
use common::{spawn_app_with, test_config};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Serves a canned Open Trivia DB payload. `amount=49` yields an API-level error.
async fn spawn_trivia_mock() -> String {
    async fn api(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        if params.get("amount").map(String::as_str) == Some("49") {
            return Json(json!({ "response_code": 1, "results": [] }));
        }
        assert_eq!(params.get("type").map(String::as_str), Some("multiple"));
        Json(json!({
            "response_code": 0,
            "results": [
                {
                    "category": "Science &amp; Nature",
                    "question": "What is H&#039;s atomic number?",
                    "correct_answer": "1"
                },
                {
                    "category": "Science &amp; Nature",
                    "question": "Which planet is called the &quot;Red Planet&quot;?",
                    "correct_answer": "Mars"
                },
                { "category": "Science &amp; Nature", "question": "Broken item" }
            ]
        }))
    }

    let app = Router::new().route("/api.php", get(api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}/api.php", port)
}

#[tokio::test]
async fn import_creates_deck_with_decoded_cards() {
    let trivia_url = spawn_trivia_mock().await;
    let app = spawn_app_with(test_config(&trivia_url)).await;
    let token = app.student_token().await;

    let response = app
        .post("/api/import-flashcards?amount=3&difficulty=easy", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "2 flashcards imported successfully!");
    assert_eq!(body["deck"]["title"], "Imported Trivia: Science & Nature");

    let cards = body["flashcards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["title"], "What is H's atomic number?");
    assert_eq!(cards[1]["title"], "Which planet is called the \"Red Planet\"?");
    assert_eq!(cards[1]["content"], "Mars");
    assert_eq!(cards[0]["deck_id"], body["deck"]["id"]);

    let mine: Vec<Value> = app
        .get("/api/flashcard", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);
}

#[tokio::test]
async fn import_rejects_bad_parameters() {
    let trivia_url = spawn_trivia_mock().await;
    let app = spawn_app_with(test_config(&trivia_url)).await;
    let token = app.student_token().await;

    let response = app
        .post("/api/import-flashcards?difficulty=impossible", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .post("/api/import-flashcards?amount=0", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn import_surfaces_upstream_errors_without_writing() {
    let trivia_url = spawn_trivia_mock().await;
    let app = spawn_app_with(test_config(&trivia_url)).await;
    let token = app.student_token().await;

    let response = app
        .post("/api/import-flashcards?amount=49", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);

    let (decks,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM decks")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(decks, 0);
}

#[tokio::test]
async fn import_requires_a_session() {
    let app = spawn_app_with(test_config("http://127.0.0.1:9/api.php")).await;

    let response = app
        .client
        .post(app.url("/api/import-flashcards"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
