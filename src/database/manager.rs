use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::{DatabaseConfig, StoreKind};
use crate::database::memory::MemoryNoteStore;
use crate::database::notes::PgNoteStore;
use crate::database::store::{NoteStore, StoreError};

/// Builds the configured note store and its connection pool
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the store selected by `config.store`
    pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn NoteStore>, StoreError> {
        match config.store {
            StoreKind::Memory => {
                info!("Using in-memory note store");
                Ok(Arc::new(MemoryNoteStore::new()))
            }
            StoreKind::Postgres => {
                let pool = Self::connect(config).await?;
                Ok(Arc::new(PgNoteStore::new(pool)))
            }
        }
    }

    /// Create a Postgres pool from DATABASE_URL and pool settings
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
        let connection_string = config
            .url
            .as_deref()
            .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;

        let redacted_url = Self::redacted(connection_string)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(connection_string)
            .await?;

        info!("Created database pool for: {}", redacted_url);
        Ok(pool)
    }

    /// Validate the URL and strip credentials for logging
    fn redacted(connection_string: &str) -> Result<String, StoreError> {
        let mut url = url::Url::parse(connection_string)
            .map_err(|e| StoreError::InvalidDatabaseUrl(e.to_string()))?;

        if !matches!(url.scheme(), "postgres" | "postgresql") {
            return Err(StoreError::InvalidDatabaseUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let _ = url.set_password(None);
        let _ = url.set_username("");
        Ok(url.to_string())
    }
}
