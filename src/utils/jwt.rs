// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    error::AppError,
    models::user::{Role, User},
    state::AppState,
};

/// JWT Claims structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Subject - Stores the User ID (as string).
    pub sub: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

/// Why a token was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Invalid,
}

/// Signs a new JWT whose subject is the user's id.
pub fn sign_jwt(user_id: i64, secret: &str, expiration_seconds: u64) -> Result<String, AppError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + expiration_seconds) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies signature and expiry, keeping expiry distinct from other failures.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}

/// Builds the session cookie carrying `token`.
pub fn session_cookie(config: &Config, token: String) -> Cookie<'static> {
    Cookie::build((config.jwt_token_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// A cookie that, once removed from the jar, clears the session.
pub fn expired_session_cookie(config: &Config) -> Cookie<'static> {
    Cookie::build((config.jwt_token_name.clone(), String::new()))
        .path("/")
        .build()
}

/// What a route group requires of the caller.
#[derive(Debug, Clone, Copy)]
pub enum Access {
    /// Any signed-in user.
    Authenticated,
    /// A signed-in user whose role is in the set.
    Roles(&'static [Role]),
}

impl Access {
    pub fn permits(&self, role: Role) -> bool {
        match self {
            Access::Authenticated => true,
            Access::Roles(roles) => roles.contains(&role),
        }
    }
}

/// State of the authorization middleware: the app state plus the route's access rule.
#[derive(Clone)]
pub struct AuthGate {
    pub pool: SqlitePool,
    pub config: Config,
    pub access: Access,
}

impl AuthGate {
    pub fn new(state: &AppState, access: Access) -> Self {
        Self {
            pool: state.pool.clone(),
            config: state.config.clone(),
            access,
        }
    }
}

/// Axum Middleware: Authorization.
///
/// Reads the session cookie, verifies the token, loads the user and checks the
/// route's `Access` rule. On success the `User` is injected into the request
/// extensions for handlers to use.
pub async fn authorize(
    State(gate): State<AuthGate>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(cookie) = jar.get(&gate.config.jwt_token_name) else {
        tracing::debug!("Token is missing");
        return Err(AppError::AuthError("Token is missing".to_string()));
    };

    let claims = match verify_jwt(cookie.value(), &gate.config.jwt_secret) {
        Ok(claims) => claims,
        Err(TokenError::Expired) => {
            tracing::debug!("Token has expired");
            return Err(AppError::AuthError("Token has expired".to_string()));
        }
        Err(TokenError::Invalid) => {
            tracing::warn!("Invalid token presented");
            return Err(AppError::AuthError("Invalid token".to_string()));
        }
    };

    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, uid, name, password, role, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(&gate.pool)
    .await
    .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let Some(user) = user else {
        tracing::warn!(user_id, "Token subject not found");
        return Err(AppError::AuthError("User not found".to_string()));
    };

    if !gate.access.permits(user.role) {
        tracing::warn!(uid = %user.uid, role = ?user.role, "Role not permitted");
        return Err(AppError::Forbidden(
            "User does not have the required role".to_string(),
        ));
    }

    tracing::debug!(uid = %user.uid, role = ?user.role, "Authenticated");
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
