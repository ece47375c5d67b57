//! News repository
//!
//! - list_published: status filter + newest publication first
//! - get_by_id: any status, `NotFound` for zero rows

use async_trait::async_trait;
use once_cell::sync::Lazy;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{begin, commit, NewsStore};
use crate::db::rows::{map_rows, projection, NEWS_COLUMNS};
use crate::error::{StoreError, StoreResult};
use crate::models::{NewsItem, NewsStatus};

const RESOURCE: &str = "news item";

static LIST_PUBLISHED_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        "SELECT {} FROM news WHERE status = $1 ORDER BY published_at DESC",
        projection(&NEWS_COLUMNS)
    )
});

static GET_BY_ID_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        "SELECT {} FROM news WHERE id = $1",
        projection(&NEWS_COLUMNS)
    )
});

/// News repository
#[derive(Clone)]
pub struct NewsRepo {
    pool: PgPool,
}

impl NewsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsStore for NewsRepo {
    async fn list_published(&self) -> StoreResult<Vec<NewsItem>> {
        const CONTEXT: &str = "list published news";
        let status = NewsStatus::Published;

        let mut tx = begin(&self.pool, CONTEXT).await?;
        let rows = sqlx::query(LIST_PUBLISHED_SQL.as_str())
            .persistent(false)
            .bind(status.as_str())
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| StoreError::internal(CONTEXT, e))?;
        commit(tx, CONTEXT).await?;

        let items: Vec<NewsItem> = map_rows(&rows, RESOURCE);
        tracing::debug!(count = items.len(), "Listed published news");
        Ok(items)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<NewsItem> {
        // ids are UUIDs in the store; anything else cannot match a row
        let Ok(uuid) = Uuid::parse_str(id) else {
            tracing::debug!(id, "News id is not a UUID");
            return Err(StoreError::not_found(RESOURCE, id));
        };

        const CONTEXT: &str = "get news by id";
        let mut tx = begin(&self.pool, CONTEXT).await?;
        let row = sqlx::query(GET_BY_ID_SQL.as_str())
            .persistent(false)
            .bind(uuid)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::from_sqlx(CONTEXT, RESOURCE, id, e))?;
        commit(tx, CONTEXT).await?;

        NewsItem::from_row(&row).map_err(|e| StoreError::internal("map news row", e))
    }
}
