//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Links and their categories are joined through `link_categories`. Inserting
/// a link and tagging it happen in one transaction.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LinkRow {
    id: i64,
    url: String,
    title: String,
    visible: bool,
    category_id: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.url,
            row.title,
            row.visible,
            row.category_id,
            row.created_at,
        )
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tx = self.pool.begin().await?;

        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO links (url, title, visible)
            VALUES ($1, $2, $3)
            RETURNING id, created_at
            "#,
        )
        .bind(&new_link.url)
        .bind(&new_link.title)
        .bind(new_link.visible)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO link_categories (link_id, category_id) VALUES ($1, $2)")
            .bind(id)
            .bind(new_link.category_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Link::new(
            id,
            new_link.url,
            new_link.title,
            new_link.visible,
            new_link.category_id,
            created_at,
        ))
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT l.id, l.url, l.title, l.visible, lc.category_id, l.created_at
            FROM links l
            JOIN link_categories lc ON lc.link_id = l.id
            WHERE lc.category_id = $1
            ORDER BY l.id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
