use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    MySql,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(StorageBackend::MySql),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::configuration(format!(
                "Invalid STORAGE_BACKEND '{}' (expected mysql or memory)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub url: Option<String>,
    pub pool_size: u32,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let backend: StorageBackend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "mysql".to_string())
            .parse()?;

        let url = env::var("DATABASE_URL").ok();
        if backend == StorageBackend::MySql && url.is_none() {
            return Err(AppError::configuration("DATABASE_URL not set"));
        }

        Ok(DatabaseConfig {
            backend,
            url,
            pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid DATABASE_POOL_SIZE"))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid DATABASE_MAX_CONNECTIONS"))?,
            run_migrations: env::var("DATABASE_RUN_MIGRATIONS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid DATABASE_RUN_MIGRATIONS"))?,
        })
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| AppError::configuration("DATABASE_URL not set"))?;

        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(url)
            .await
            .map_err(AppError::Database)
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self, pool: &MySqlPool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| AppError::Database(e.into()))?;

        tracing::info!("Database migrations applied");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == StorageBackend::MySql && self.pool_size > self.max_connections {
            return Err(AppError::configuration(
                "DATABASE_POOL_SIZE must not exceed DATABASE_MAX_CONNECTIONS",
            ));
        }
        Ok(())
    }
}
