//! Folder repository
//!
//! Folders are created once and never renamed or removed.

use sqlx::SqlitePool;

use super::DbError;
use crate::models::FolderName;

/// Folder repository
pub struct FolderRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FolderRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All folder names, ascending.
    pub async fn list(&self) -> Result<Vec<String>, DbError> {
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM folders ORDER BY name ASC")
            .fetch_all(self.pool)
            .await?;
        Ok(names)
    }

    /// Insert a folder. A taken name is a `Conflict`.
    pub async fn create(&self, name: FolderName) -> Result<String, DbError> {
        let result = sqlx::query("INSERT INTO folders (name) VALUES (?)")
            .bind(name.as_str())
            .execute(self.pool)
            .await;

        match result {
            Ok(_) => Ok(name.into_string()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(DbError::Conflict {
                resource: "folder",
                id: name.into_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_pool;

    fn name(s: &str) -> FolderName {
        FolderName::new(Some(s.into())).unwrap()
    }

    #[tokio::test]
    async fn list_is_sorted() {
        let pool = test_pool().await;
        let repo = FolderRepo::new(&pool);

        for n in ["work", "Archive", "reading"] {
            repo.create(name(n)).await.unwrap();
        }

        assert_eq!(repo.list().await.unwrap(), vec!["Archive", "reading", "work"]);
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let pool = test_pool().await;
        let repo = FolderRepo::new(&pool);

        assert_eq!(repo.create(name("work")).await.unwrap(), "work");
        let err = repo.create(name("work")).await.unwrap_err();

        assert!(matches!(err, DbError::Conflict { resource: "folder", .. }));
        assert_eq!(repo.list().await.unwrap(), vec!["work"]);
    }
}
