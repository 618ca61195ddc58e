//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One parameterized statement per operation
//! - Conflicts come from the UNIQUE constraint, not a prior SELECT
//! - Zero affected rows on update/delete means not found

pub mod folders;
pub mod links;

pub use folders::FolderRepo;
pub use links::LinkRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: String },

    #[error("tags encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = crate::db::create_pool(crate::db::pool::MEMORY_URL)
        .await
        .expect("pool creation failed");
    crate::db::ensure_schema(&pool)
        .await
        .expect("schema creation failed");
    pool
}
