//! Link repository
//!
//! Tags are stored as a JSON text column and decoded on every read.

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::{tags, Link, LinkUpdate, NewLink};

/// Link row as stored
#[derive(Debug, Clone, FromRow)]
struct LinkRow {
    id: String,
    url: String,
    notes: Option<String>,
    folder: Option<String>,
    tags: Option<String>,
    created: String,
}

impl LinkRow {
    fn into_link(self) -> Result<Link, DbError> {
        Ok(Link {
            tags: tags::decode(self.tags.as_deref())?,
            id: self.id,
            url: self.url,
            notes: self.notes.unwrap_or_default(),
            folder: self.folder.unwrap_or_default(),
            created: self.created,
        })
    }
}

/// Link repository
pub struct LinkRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LinkRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All links, newest `created` first (plain string ordering).
    pub async fn list(&self) -> Result<Vec<Link>, DbError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, url, notes, folder, tags, created
            FROM links
            ORDER BY created DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(LinkRow::into_link).collect()
    }

    /// Get a single link by id.
    pub async fn get(&self, id: &str) -> Result<Link, DbError> {
        let row: LinkRow = sqlx::query_as(
            r#"
            SELECT id, url, notes, folder, tags, created
            FROM links
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "link",
            id: id.to_owned(),
        })?;

        row.into_link()
    }

    /// Insert a link and echo it back.
    ///
    /// A taken id fails on the primary key and is reported as a plain
    /// database error.
    pub async fn create(&self, link: NewLink) -> Result<Link, DbError> {
        let link = link.into_link();
        let stored_tags = tags::encode(&link.tags)?;

        sqlx::query(
            r#"
            INSERT INTO links (id, url, notes, folder, tags, created)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&link.id)
        .bind(&link.url)
        .bind(&link.notes)
        .bind(&link.folder)
        .bind(&stored_tags)
        .bind(&link.created)
        .execute(self.pool)
        .await?;

        tracing::debug!(id = %link.id, "link created");
        Ok(link)
    }

    /// Overwrite url, notes, folder and tags. `id` and `created` never change.
    pub async fn update(&self, id: &str, update: LinkUpdate) -> Result<(), DbError> {
        let stored_tags = tags::encode(&update.tags)?;

        let result = sqlx::query(
            r#"
            UPDATE links
            SET url = ?, notes = ?, folder = ?, tags = ?
            WHERE id = ?
            "#,
        )
        .bind(&update.url)
        .bind(&update.notes)
        .bind(&update.folder)
        .bind(&stored_tags)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "link",
                id: id.to_owned(),
            });
        }
        Ok(())
    }

    /// Delete a link by id.
    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "link",
                id: id.to_owned(),
            });
        }
        Ok(())
    }
}
