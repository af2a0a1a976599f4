use crate::error::StoreError;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

/// Connection settings for the relational store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
            sqlx_logging: false,
        }
    }

    /// A private in-memory SQLite store.
    ///
    /// Every pooled connection to `sqlite::memory:` opens its own database, so the
    /// pool is pinned to a single connection.
    pub fn sqlite_in_memory() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
            ..Self::new("sqlite::memory:")
        }
    }
}

/// Creates a database connection pool
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection, StoreError> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging)
        .sqlx_logging_level(log::LevelFilter::Debug);

    Database::connect(options)
        .await
        .map_err(|err| StoreError::Unavailable(err.to_string()))
}

/// Creates every table, constraint and index that does not exist yet.
///
/// Applied migrations are recorded, so calling this again is a no-op.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), StoreError> {
    Migrator::up(db, None).await?;
    log::info!("Database schema is up to date");
    Ok(())
}

/// Rolls back every applied migration, dropping all tables
pub async fn drop_schema(db: &DatabaseConnection) -> Result<(), StoreError> {
    Migrator::down(db, None).await?;
    log::info!("Database schema dropped");
    Ok(())
}
