//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{JobRepo, JobStore, Liveness, NewsRepo, NewsStore};

/// Shared application state
///
/// Holds trait objects rather than the pool so handlers never reach the
/// database except through a repository.
#[derive(Clone)]
pub struct AppState {
    pub news: Arc<dyn NewsStore>,
    pub jobs: Arc<dyn JobStore>,
    pub liveness: Arc<dyn Liveness>,
}

impl AppState {
    pub fn new(
        news: Arc<dyn NewsStore>,
        jobs: Arc<dyn JobStore>,
        liveness: Arc<dyn Liveness>,
    ) -> Self {
        Self {
            news,
            jobs,
            liveness,
        }
    }

    /// Postgres-backed state; every repository shares the one pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(NewsRepo::new(pool.clone())),
            Arc::new(JobRepo::new(pool.clone())),
            Arc::new(pool),
        )
    }
}
