// tests/profile_tests.rs

mod common;

use common::spawn_app;
use serde_json::{Value, json};

#[tokio::test]
async fn test_profile_complex_flow() {
    // Arrange
    let app = spawn_app().await;
    let token = app.student_token().await;

    // 1. Writes need a session
    let response = app
        .client
        .post(app.url("/api/profile"))
        .json(&json!({ "name": "Anon", "classes": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);

    // 2. Create with messy class list
    let response = app
        .post("/api/profile", &token)
        .json(&json!({
            "name": "Jane",
            "classes": [" AP CSP ", "AP Physics", "AP CSP", ""],
            "favorite_class": "AP CSP",
            "grade": "11"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let profile: Value = response.json().await.unwrap();
    let id = profile["id"].as_i64().unwrap();
    assert_eq!(profile["classes"], json!(["AP CSP", "AP Physics"]));
    assert!(profile["user_id"].is_i64());

    // 3. Public reads
    let list: Vec<Value> = app
        .client
        .get(app.url("/api/profile"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);

    let response = app
        .client
        .get(app.url(&format!("/api/profile/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    // 4. Partial update keeps the other fields
    let response = app
        .put(&format!("/api/profile/{}", id), &token)
        .json(&json!({ "favorite_flashcard": "Mitochondria" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "Jane");
    assert_eq!(updated["grade"], "11");
    assert_eq!(updated["favorite_flashcard"], "Mitochondria");
    assert_eq!(updated["classes"], json!(["AP CSP", "AP Physics"]));

    // 5. Delete, then it is gone
    let response = app
        .delete(&format!("/api/profile/{}", id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .client
        .get(app.url(&format!("/api/profile/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn profile_requires_name_and_classes() {
    let app = spawn_app().await;
    let token = app.student_token().await;

    let response = app
        .post("/api/profile", &token)
        .json(&json!({ "name": "No classes" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .post("/api/profile", &token)
        .json(&json!({ "classes": "AP CSP" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn chat_logs_are_listed_newest_first() {
    let app = spawn_app().await;
    let token = app.student_token().await;

    for (question, response) in [("Hi?", "Hello!"), ("What is 2+2?", "4")] {
        let res = app
            .post("/api/chatlog", &token)
            .json(&json!({ "question": question, "response": response }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 201);
    }

    let response = app
        .post("/api/chatlog", &token)
        .json(&json!({ "question": "Missing response" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let logs: Vec<Value> = app
        .get("/api/chatlog", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["question"], "What is 2+2?");

    let id = logs[1]["id"].as_i64().unwrap();
    let one: Value = app
        .get(&format!("/api/chatlog/{}", id), &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(one["response"], "Hello!");

    let response = app.get("/api/chatlog/99999", &token).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
