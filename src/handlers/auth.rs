// src/handlers/auth.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    extract::AppJson,
    models::user::{CreateUserRequest, LoginRequest, User},
    utils::{
        hash::{hash_password, verify_password},
        jwt::{expired_session_cookie, session_cookie, sign_jwt},
    },
};

pub(crate) const USER_COLUMNS: &str = "id, uid, name, password, role, created_at";

/// Registers a new student account.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created and the user object (excluding password).
pub async fn register(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let hashed_password = hash_password(&payload.password)?;
    let name = payload.name.unwrap_or_else(|| payload.uid.clone());

    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (uid, name, password, role) VALUES (?, ?, ?, 'Student') RETURNING {}",
        USER_COLUMNS
    ))
    .bind(&payload.uid)
    .bind(&name)
    .bind(&hashed_password)
    .fetch_one(&pool)
    .await
    .map_err(|e| match AppError::from(e) {
        AppError::Conflict(_) => {
            AppError::Conflict(format!("Uid '{}' already exists", payload.uid))
        }
        other => {
            tracing::error!("Failed to register user: {:?}", other);
            other
        }
    })?;

    tracing::info!(uid = %user.uid, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticates a user and issues the session token.
///
/// The token is returned in the body and set as the session cookie.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE uid = ?",
        USER_COLUMNS
    ))
    .bind(&payload.uid)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::AuthError("Invalid uid or password".to_string()))?;

    if !verify_password(&payload.password, &user.password)? {
        return Err(AppError::AuthError("Invalid uid or password".to_string()));
    }

    let token = sign_jwt(user.id, &config.jwt_secret, config.jwt_expiration)?;
    let jar = jar.add(session_cookie(&config, token.clone()));

    Ok((jar, Json(json!({ "token": token, "user": user }))))
}

/// Clears the session cookie.
pub async fn logout(State(config): State<Config>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(expired_session_cookie(&config));
    (jar, Json(json!({ "message": "Logged out" })))
}

/// Returns the authenticated user.
pub async fn me(Extension(user): Extension<User>) -> impl IntoResponse {
    Json(user)
}
