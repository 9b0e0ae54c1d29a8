//! Migrated SQLite databases for tests
//!
//! `memory` gives a single-connection database that lives as long as its pool.
//! `pooled` backs the pool with a temporary file so several writers can hold
//! connections at once.

use order_ingest::config::DatabaseConfig;
use order_ingest::storage::database::Database;
use std::sync::Arc;
use tempfile::TempDir;

/// Migrated database plus whatever keeps its storage alive
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
    _dir: Option<Arc<TempDir>>,
}

impl TestDatabase {
    /// In-memory database with one connection
    pub async fn new() -> Self {
        Self {
            inner: Arc::new(migrated(&test_db_config()).await),
            _dir: None,
        }
    }

    /// File-backed database with `connections` pooled connections
    pub async fn pooled(connections: u32) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", dir.path().join("orders.db").display()),
            max_connections: connections,
            min_connections: 1,
            ..test_db_config()
        };
        Self {
            inner: Arc::new(migrated(&config).await),
            _dir: Some(Arc::new(dir)),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner
    }

    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Config for a private `sqlite::memory:` pool
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connection_timeout: 5,
        enabled: true,
    }
}

async fn migrated(config: &DatabaseConfig) -> Database {
    let db = Database::new(config)
        .await
        .unwrap_or_else(|e| panic!("connect {}: {}", config.url, e));
    db.migrate().await.expect("migrations");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_database_is_migrated() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_pooled_database_is_migrated() {
        let db = TestDatabase::pooled(4).await;
        assert!(db.db().health_check().await.is_ok());
    }
}
