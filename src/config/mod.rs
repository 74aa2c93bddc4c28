use crate::core::{AppError, Result};
use crate::middleware::auth::hash_api_key;
use argon2::PasswordHash;
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::{DatabaseConfig, StorageBackend};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    /// Argon2 PHC hash of the expected `X-API-Key`; `None` leaves the API gate open
    pub api_key_hash: Option<String>,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            security: SecurityConfig {
                api_key_hash: api_key_hash_from_env()?,
                cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .map(|origins| parse_list(&origins))
                    .unwrap_or_default(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.request_timeout.is_zero() {
            return Err(AppError::configuration(
                "Request timeout must be greater than 0",
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "Server workers must be greater than 0",
            ));
        }

        if let Some(hash) = &self.security.api_key_hash {
            PasswordHash::new(hash).map_err(|e| {
                AppError::configuration(format!("API_KEY_HASH is not a valid PHC string: {}", e))
            })?;
        }

        self.database.validate()
    }
}

/// `API_KEY_HASH` wins; a plain `API_KEY` is hashed once at load
fn api_key_hash_from_env() -> Result<Option<String>> {
    let non_blank = |name: &str| env::var(name).ok().filter(|value| !value.trim().is_empty());

    match (non_blank("API_KEY_HASH"), non_blank("API_KEY")) {
        (Some(hash), _) => Ok(Some(hash)),
        (None, Some(key)) => hash_api_key(&key).map(Some),
        (None, None) => Ok(None),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
