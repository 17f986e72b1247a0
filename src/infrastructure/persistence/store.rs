//! Store handle owning the storage backend for the lifetime of the process.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use super::{MemoryUrlRepository, PgUrlRepository};
use crate::config::Config;
use crate::domain::repositories::UrlRepository;

/// Connection string prefix selecting the in-memory backend.
pub const MEMORY_SCHEME: &str = "memory://";

/// Explicitly constructed storage backend.
///
/// Built once at startup, handed to the services as a repository, and closed on
/// shutdown.
pub enum Store {
    Postgres(Arc<PgPool>),
    Memory(Arc<MemoryUrlRepository>),
}

impl Store {
    /// Connects to the backend named by `config.database_url`.
    ///
    /// For PostgreSQL the pool is configured from the `DB_*` settings and pending
    /// migrations are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails.
    pub async fn connect(config: &Config) -> Result<Self> {
        if config.database_url.starts_with(MEMORY_SCHEME) {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            return Ok(Self::Memory(Arc::new(MemoryUrlRepository::new())));
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self::Postgres(Arc::new(pool)))
    }

    /// Repository backed by this store.
    pub fn url_repository(&self) -> Arc<dyn UrlRepository> {
        match self {
            Store::Postgres(pool) => {
                Arc::new(PgUrlRepository::new(pool.clone())) as Arc<dyn UrlRepository>
            }
            Store::Memory(repo) => repo.clone() as Arc<dyn UrlRepository>,
        }
    }

    /// Short backend description for diagnostics.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Postgres(_) => "PostgreSQL",
            Store::Memory(_) => "in-memory",
        }
    }

    /// Verifies that the backend answers queries.
    pub async fn ping(&self) -> Result<()> {
        if let Store::Postgres(pool) = self {
            sqlx::query("SELECT 1")
                .execute(pool.as_ref())
                .await
                .context("Database did not answer")?;
        }
        Ok(())
    }

    /// Releases the backend. Waits for in-flight PostgreSQL connections to be returned.
    pub async fn close(self) {
        if let Store::Postgres(pool) = self {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }
}
