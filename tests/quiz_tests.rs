// tests/quiz_tests.rs

mod common;

use std::collections::HashSet;

use common::spawn_app;
use serde_json::{Value, json};
use study_hub::utils::quiz::QuestionPool;

#[tokio::test]
async fn quiz_serves_ten_distinct_questions_without_answers() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/api/quiz/apush")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let questions: Vec<Value> = response.json().await.unwrap();
    assert_eq!(questions.len(), 10);

    let ids: HashSet<i64> = questions.iter().map(|q| q["id"].as_i64().unwrap()).collect();
    assert_eq!(ids.len(), 10);

    for q in &questions {
        assert!(q.get("correct_answer").is_none());
        assert!(q.get("correctAnswer").is_none());
        assert_eq!(q["options"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn submit_scores_exact_matches_and_records_leaderboard() {
    let app = spawn_app().await;
    let pool = QuestionPool::apush();
    let first = pool.get(1).unwrap();
    let second = pool.get(2).unwrap();

    let response = app
        .client
        .post(app.url("/api/quiz/apush/submit"))
        .json(&json!({
            "name": "Ada",
            "answers": [
                { "questionId": 1, "answer": first.correct_answer },
                { "questionId": 2, "answer": second.correct_answer.to_lowercase() + "x" },
                { "questionId": 9999, "answer": "anything" }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let result: Value = response.json().await.unwrap();
    assert_eq!(result["name"], "Ada");
    assert_eq!(result["score"], 1);

    let board: Vec<Value> = app
        .client
        .get(app.url("/api/leaderboard/apush"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0]["name"], "Ada");
    assert_eq!(board[0]["score"], 1);
}

#[tokio::test]
async fn submit_requires_name() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/quiz/apush/submit"))
        .json(&json!({ "answers": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn leaderboard_is_sorted_and_appends_repeated_names() {
    let app = spawn_app().await;
    let pool = QuestionPool::apush();
    let answer = |id: i64| pool.get(id).unwrap().correct_answer;

    for (name, answers) in [
        ("Low", json!([])),
        ("High", json!([
            { "questionId": 1, "answer": answer(1) },
            { "questionId": 2, "answer": answer(2) }
        ])),
        ("Low", json!([{ "questionId": 3, "answer": answer(3) }])),
    ] {
        let response = app
            .client
            .post(app.url("/api/quiz/apush/submit"))
            .json(&json!({ "name": name, "answers": answers }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    let board: Vec<Value> = app
        .client
        .get(app.url("/api/leaderboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let rows: Vec<(String, i64)> = board
        .iter()
        .map(|e| (e["name"].as_str().unwrap().to_string(), e["score"].as_i64().unwrap()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("High".to_string(), 2),
            ("Low".to_string(), 1),
            ("Low".to_string(), 0),
        ]
    );
}

#[tokio::test]
async fn empty_leaderboard_is_an_empty_array() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/api/leaderboard")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let board: Vec<Value> = response.json().await.unwrap();
    assert!(board.is_empty());
}

#[tokio::test]
async fn leaderboard_writes_require_a_session() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/leaderboard"))
        .json(&json!({ "name": "Cheater", "score": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);

    let token = app.student_token().await;
    let response = app
        .post("/api/leaderboard", &token)
        .json(&json!({ "name": "Manual", "score": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let entry: Value = response.json().await.unwrap();
    let id = entry["id"].as_i64().unwrap();

    let response = app
        .delete(&format!("/api/leaderboard/{}", id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .delete(&format!("/api/leaderboard/{}", id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn study_tips_are_served_per_class() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/api/tips/Physics")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["class_name"], "AP Physics");
    assert_eq!(body["tips"].as_array().unwrap().len(), 3);

    let response = app.client.get(app.url("/api/tips/Biology")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "No tips found for AP Biology");
}
