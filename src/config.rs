// src/config.rs

use std::env;
use dotenvy::dotenv;

use crate::error::AppError;

/// Number of questions served per quiz round.
pub const QUIZ_QUESTION_COUNT: usize = 10;

/// Upper bound on flashcards fetched by a single trivia import.
pub const MAX_IMPORT_AMOUNT: u32 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Name of the cookie that carries the signed session token.
    pub jwt_token_name: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    /// Password applied by the admin reset endpoint.
    pub default_password: String,
    pub trivia_api_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let jwt_token_name = env::var("JWT_TOKEN_NAME")
            .unwrap_or_else(|_| "jwt_python_flask".to_string());

        let jwt_expiration = parsed("JWT_EXPIRATION", 43_200)?;

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let default_password = env::var("DEFAULT_PASSWORD")
            .unwrap_or_else(|_| "123Qwerty!".to_string());

        let trivia_api_url = env::var("TRIVIA_API_URL")
            .unwrap_or_else(|_| "https://opentdb.com/api.php".to_string());

        let port = parsed("PORT", 8887)?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_token_name,
            jwt_expiration,
            rust_log,
            admin_username: env::var("ADMIN_USERNAME").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            default_password,
            trivia_api_url,
            port,
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::InternalServerError(format!("{} must be set", key)))
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::InternalServerError(format!("{} has an invalid value: {}", key, raw))),
        Err(_) => Ok(default),
    }
}
