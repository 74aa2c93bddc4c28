use sqlx::MySqlPool;
use std::sync::Arc;

use crate::config::database::{DatabaseConfig, StorageBackend};
use crate::core::crud::{InMemoryRepository, MySqlRepository, SqlEntity};
use crate::core::error::Result;
use crate::core::traits::Repository;

/// Storage backend selected at startup; hands out one repository per entity
#[derive(Clone)]
pub enum Storage {
    MySql(MySqlPool),
    Memory,
}

impl Storage {
    /// Connect the configured backend, running migrations when enabled
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        match config.backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Storage::Memory)
            }
            StorageBackend::MySql => {
                let pool = config.create_pool().await?;
                if config.run_migrations {
                    config.migrate(&pool).await?;
                }
                Ok(Storage::MySql(pool))
            }
        }
    }

    pub fn repository<E: SqlEntity>(&self) -> Arc<dyn Repository<E>> {
        match self {
            Storage::MySql(pool) => Arc::new(MySqlRepository::<E>::new(pool.clone())),
            Storage::Memory => Arc::new(InMemoryRepository::<E>::new()),
        }
    }

    /// Round trip used by the readiness check
    pub async fn ping(&self) -> Result<()> {
        match self {
            Storage::MySql(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Storage::Memory => Ok(()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Storage::MySql(_) => "mysql",
            Storage::Memory => "memory",
        }
    }
}
