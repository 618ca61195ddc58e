//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits.

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// URL of a private in-memory database.
pub const MEMORY_URL: &str = "sqlite::memory:";

/// Default database location: `~/.linkstash/links.db`.
pub fn default_database_url() -> String {
    let path = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".linkstash")
        .join("links.db");
    format!("sqlite://{}", path.display())
}

/// Create a SQLite connection pool.
///
/// The database file is created if it does not exist yet.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://links.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// Every connection to `sqlite::memory:` opens its own empty database, so
/// an in-memory pool is pinned to a single connection that is never reaped.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if is_memory_url(database_url) {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}

/// Filesystem path behind a `sqlite:` URL, if the URL names a file.
pub fn database_file(database_url: &str) -> Option<PathBuf> {
    if is_memory_url(database_url) {
        return None;
    }
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url == MEMORY_URL
        || database_url.contains(":memory:")
        || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_pool_acquires_connection() {
        let pool = create_pool(MEMORY_URL).await.expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn memory_pool_shares_one_database() {
        let pool = create_pool(MEMORY_URL).await.unwrap();
        sqlx::query("CREATE TABLE t (x INTEGER)").execute(&pool).await.unwrap();

        // Spawn concurrent tasks; all of them must see the same table
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    sqlx::query("INSERT INTO t (x) VALUES (?)")
                        .bind(i)
                        .execute(&pool)
                        .await
                        .expect("concurrent insert failed");
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked");
        }

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM t")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 10);
    }

    #[tokio::test]
    async fn file_pool_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("links.db").display());

        let pool = create_pool(&url).await.unwrap();
        pool.close().await;

        assert!(dir.path().join("links.db").exists());
    }

    #[test]
    fn database_file_paths() {
        assert_eq!(
            database_file("sqlite:///tmp/links.db"),
            Some(PathBuf::from("/tmp/links.db"))
        );
        assert_eq!(
            database_file("sqlite:links.db?mode=rwc"),
            Some(PathBuf::from("links.db"))
        );
        assert_eq!(database_file(MEMORY_URL), None);
        assert_eq!(database_file("postgres://localhost/x"), None);
    }
}
