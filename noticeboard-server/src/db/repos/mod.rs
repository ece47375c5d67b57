//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Owns a clone of the process-wide pool, injected at construction
//! - One parameterized statement per operation, no statement caching
//! - Each statement runs in its own transaction (see [`begin`])
//! - Lookups by id return `StoreError::NotFound` for zero rows
//! - Lists return an empty `Vec` for zero rows and skip rows that fail to map
//!
//! Handlers depend on the traits below so tests can swap in another store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{StoreError, StoreResult};
use crate::models::{JobPosting, NewJob, NewsItem};

pub mod jobs;
pub mod news;

pub use jobs::JobRepo;
pub use news::NewsRepo;

/// Open the transaction a single repository statement runs in.
///
/// sqlx sends an unnamed statement as Parse/Describe/Sync and only then
/// Bind/Execute/Sync. A transaction-mode pooler may reassign the backend at
/// any ReadyForQuery reporting idle, so the statement must sit inside an
/// open transaction for Parse and Bind to reach the same backend.
pub(crate) async fn begin(
    pool: &PgPool,
    context: &'static str,
) -> StoreResult<Transaction<'static, Postgres>> {
    pool.begin()
        .await
        .map_err(|e| StoreError::internal(context, e))
}

pub(crate) async fn commit(
    tx: Transaction<'static, Postgres>,
    context: &'static str,
) -> StoreResult<()> {
    tx.commit()
        .await
        .map_err(|e| StoreError::internal(context, e))
}

#[async_trait]
pub trait NewsStore: Send + Sync + 'static {
    /// Published items, newest `published_at` first.
    async fn list_published(&self) -> StoreResult<Vec<NewsItem>>;

    /// Any item by id, regardless of status.
    async fn get_by_id(&self, id: &str) -> StoreResult<NewsItem>;
}

#[async_trait]
pub trait JobStore: Send + Sync + 'static {
    /// Open postings, newest `created_at` first.
    async fn list_open(&self) -> StoreResult<Vec<JobPosting>>;

    /// Any posting by id, regardless of status.
    async fn get_by_id(&self, id: &str) -> StoreResult<JobPosting>;

    /// Insert an `Open` posting with no poster and return the stored row.
    async fn create(&self, job: NewJob) -> StoreResult<JobPosting>;
}

/// Store round-trip used by the health endpoint
#[async_trait]
pub trait Liveness: Send + Sync + 'static {
    async fn ping(&self, timeout: Duration) -> StoreResult<()>;
}

#[async_trait]
impl Liveness for PgPool {
    async fn ping(&self, timeout: Duration) -> StoreResult<()> {
        super::pool::ping(self, timeout).await
    }
}
