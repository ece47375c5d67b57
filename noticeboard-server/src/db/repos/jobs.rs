//! Job repository
//!
//! - list_open: status filter + newest creation first
//! - get_by_id: any status, `NotFound` for zero rows
//! - create: single INSERT ... RETURNING, status forced to `Open`

use async_trait::async_trait;
use once_cell::sync::Lazy;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{begin, commit, JobStore};
use crate::db::rows::{map_rows, projection, JOB_COLUMNS};
use crate::error::{StoreError, StoreResult};
use crate::models::{JobPosting, JobStatus, NewJob};

const RESOURCE: &str = "job";

static LIST_OPEN_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        "SELECT {} FROM jobs WHERE status = $1 ORDER BY created_at DESC",
        projection(&JOB_COLUMNS)
    )
});

static GET_BY_ID_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        "SELECT {} FROM jobs WHERE id = $1",
        projection(&JOB_COLUMNS)
    )
});

static INSERT_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        r#"
        INSERT INTO jobs
            (title, description, location, payment_details, contact_info, status, posted_by_user_id)
        VALUES
            ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {}
        "#,
        projection(&JOB_COLUMNS)
    )
});

/// Job repository
#[derive(Clone)]
pub struct JobRepo {
    pool: PgPool,
}

impl JobRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for JobRepo {
    async fn list_open(&self) -> StoreResult<Vec<JobPosting>> {
        const CONTEXT: &str = "list open jobs";
        let status = JobStatus::Open;

        let mut tx = begin(&self.pool, CONTEXT).await?;
        let rows = sqlx::query(LIST_OPEN_SQL.as_str())
            .persistent(false)
            .bind(status.as_str())
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| StoreError::internal(CONTEXT, e))?;
        commit(tx, CONTEXT).await?;

        let jobs: Vec<JobPosting> = map_rows(&rows, RESOURCE);
        tracing::debug!(count = jobs.len(), "Listed open jobs");
        Ok(jobs)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<JobPosting> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            tracing::debug!(id, "Job id is not a UUID");
            return Err(StoreError::not_found(RESOURCE, id));
        };

        const CONTEXT: &str = "get job by id";
        let mut tx = begin(&self.pool, CONTEXT).await?;
        let row = sqlx::query(GET_BY_ID_SQL.as_str())
            .persistent(false)
            .bind(uuid)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::from_sqlx(CONTEXT, RESOURCE, id, e))?;
        commit(tx, CONTEXT).await?;

        JobPosting::from_row(&row).map_err(|e| StoreError::internal("map job row", e))
    }

    async fn create(&self, job: NewJob) -> StoreResult<JobPosting> {
        let status = JobStatus::Open;
        // no auth integration yet, so never a poster
        let posted_by: Option<Uuid> = None;

        const CONTEXT: &str = "create job";
        let mut tx = begin(&self.pool, CONTEXT).await?;
        let row = sqlx::query(INSERT_SQL.as_str())
            .persistent(false)
            .bind(job.title())
            .bind(job.description())
            .bind(job.location())
            .bind(job.payment_details())
            .bind(job.contact_info())
            .bind(status.as_str())
            .bind(posted_by)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::internal(CONTEXT, e))?;
        commit(tx, CONTEXT).await?;

        let created =
            JobPosting::from_row(&row).map_err(|e| StoreError::internal("map created job", e))?;
        tracing::info!(id = %created.id, "Created job");
        Ok(created)
    }
}
