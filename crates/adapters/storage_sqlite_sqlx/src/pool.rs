//! `SQLite` connection pool setup and schema bootstrap.

use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};

use crate::error::StorageError;

const SCHEMA: &str = include_str!("../schema.sql");

/// Configuration for the `SQLite` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:fitness_center.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Upper bound on simultaneously open connections.
    pub max_connections: u32,
    /// How long a request waits for a connection before giving up.
    pub acquire_timeout: Duration,
}

impl Config {
    /// Configuration for `database_url` with default pool limits.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// No connection is opened here: the pool connects on first use, so an
    /// unreachable database surfaces per request rather than at startup.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Options`] if the URL cannot be parsed.
    pub fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)
            .map_err(StorageError::Options)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_lazy_with(options);

        Ok(Database { pool })
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create the `members` and `workoutsessions` tables if they are missing.
    ///
    /// Existing tables are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if no connection can be acquired or the
    /// statements fail.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        let mut conn = acquire(&self.pool).await?;
        sqlx::raw_sql(SCHEMA).execute(&mut *conn).await?;
        Ok(())
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Check one connection out of the pool.
///
/// The returned guard goes back to the pool when dropped.
pub(crate) async fn acquire(pool: &SqlitePool) -> Result<PoolConnection<Sqlite>, StorageError> {
    pool.acquire().await.map_err(StorageError::Connection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_create_tables_when_using_memory_db() {
        let db = Config::new("sqlite::memory:").build().unwrap();
        db.ensure_schema().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert_eq!(names, vec!["members", "workoutsessions"]);
    }

    #[tokio::test]
    async fn should_keep_existing_rows_when_bootstrapping_twice() {
        let db = Config::new("sqlite::memory:").build().unwrap();
        db.ensure_schema().await.unwrap();
        sqlx::query("INSERT INTO members (name, age) VALUES ('Ana', 29)")
            .execute(db.pool())
            .await
            .unwrap();

        db.ensure_schema().await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[test]
    fn should_reject_malformed_url() {
        let result = Config::new("sqlite:fitness.db?mode=bogus").build();
        assert!(matches!(result, Err(StorageError::Options(_))));
    }

    #[tokio::test]
    async fn should_report_connection_error_when_file_cannot_be_opened() {
        let mut config = Config::new("sqlite:/nonexistent-fitcenter-dir/nested/fitness.db");
        config.acquire_timeout = Duration::from_secs(1);
        let db = config.build().unwrap();

        let result = db.ensure_schema().await;
        assert!(matches!(result, Err(StorageError::Connection(_))));
    }
}
