// tests/common/mod.rs

#![allow(dead_code)]

use serde_json::Value;
use sqlx::SqlitePool;
use study_hub::{config::Config, db, routes, state::AppState, utils::hash::hash_password};

pub const TOKEN_NAME: &str = "jwt_test_session";
pub const JWT_SECRET: &str = "test_secret_for_integration_tests";

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

pub fn test_config(trivia_api_url: &str) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_token_name: TOKEN_NAME.to_string(),
        jwt_expiration: 600, // 10 minutes for tests
        rust_log: "error".to_string(),
        admin_username: None,
        admin_password: None,
        default_password: "123Qwerty!".to_string(),
        trivia_api_url: trivia_api_url.to_string(),
        port: 0,
    }
}

/// Spawns the app on a random port backed by a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config("http://127.0.0.1:9/api.php")).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    db::migrate(&pool).await.expect("Failed to migrate database");

    let app = routes::create_router(AppState::new(pool.clone(), config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        pool,
        client: reqwest::Client::new(),
    }
}

pub fn unique_uid() -> String {
    format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8])
}

/// Formats a `Cookie` header carrying the session token.
pub fn session(token: &str) -> String {
    format!("{}={}", TOKEN_NAME, token)
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn register(&self, uid: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({ "uid": uid, "name": uid, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, uid: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "uid": uid, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Registers a fresh student and returns its session token.
    pub async fn student_token(&self) -> String {
        let uid = unique_uid();
        assert_eq!(self.register(&uid, "password123").await.status().as_u16(), 201);
        token_of(self.login(&uid, "password123").await).await
    }

    /// Inserts an admin directly and returns its session token.
    pub async fn admin_token(&self) -> String {
        let uid = unique_uid();
        let hashed = hash_password("adminpass").unwrap();
        sqlx::query("INSERT INTO users (uid, name, password, role) VALUES (?, ?, ?, 'Admin')")
            .bind(&uid)
            .bind("Admin")
            .bind(&hashed)
            .execute(&self.pool)
            .await
            .expect("Failed to seed admin");

        token_of(self.login(&uid, "adminpass").await).await
    }

    pub fn get(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(path))
            .header(reqwest::header::COOKIE, session(token))
    }

    pub fn post(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .post(self.url(path))
            .header(reqwest::header::COOKIE, session(token))
    }

    pub fn put(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .put(self.url(path))
            .header(reqwest::header::COOKIE, session(token))
    }

    pub fn patch(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .patch(self.url(path))
            .header(reqwest::header::COOKIE, session(token))
    }

    pub fn delete(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(self.url(path))
            .header(reqwest::header::COOKIE, session(token))
    }
}

pub async fn token_of(response: reqwest::Response) -> String {
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    body["token"].as_str().expect("token missing").to_string()
}
