//! In-memory stores for handler tests
//!
//! Mirror the repository contracts (filtering, ordering, `NotFound`,
//! server-assigned fields) without a database.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use uuid::Uuid;

use crate::db::{JobStore, Liveness, NewsStore};
use crate::error::{StoreError, StoreResult};
use crate::models::{JobPosting, JobStatus, NewJob, NewsItem, NewsStatus};
use crate::state::AppState;

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// News item published `age_minutes` before a fixed base time.
pub fn sample_news(title: &str, status: &str, age_minutes: i64) -> NewsItem {
    let at = base_time() - ChronoDuration::minutes(age_minutes);
    NewsItem {
        id: Uuid::new_v4(),
        created_at: at,
        updated_at: at,
        title: title.to_owned(),
        content: Some(format!("{title} body")),
        published_at: at,
        status: NewsStatus::from(status.to_owned()),
    }
}

/// Job created `age_minutes` before a fixed base time.
pub fn sample_job(title: &str, status: &str, age_minutes: i64) -> JobPosting {
    let at = base_time() - ChronoDuration::minutes(age_minutes);
    JobPosting {
        id: Uuid::new_v4(),
        created_at: at,
        updated_at: at,
        title: title.to_owned(),
        description: format!("{title}, details at the panchayat office"),
        location: Some("East field".into()),
        payment_details: None,
        contact_info: "98450 00000".into(),
        status: JobStatus::from(status.to_owned()),
        posted_by_user_id: None,
        expires_at: None,
    }
}

fn parse_id(resource: &'static str, id: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| StoreError::not_found(resource, id))
}

pub struct MemoryNews {
    items: Mutex<Vec<NewsItem>>,
}

#[async_trait]
impl NewsStore for MemoryNews {
    async fn list_published(&self) -> StoreResult<Vec<NewsItem>> {
        let mut items: Vec<_> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.status == NewsStatus::Published)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(items)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<NewsItem> {
        let uuid = parse_id("news item", id)?;
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == uuid)
            .cloned()
            .ok_or_else(|| StoreError::not_found("news item", id))
    }
}

pub struct MemoryJobs {
    jobs: Mutex<Vec<JobPosting>>,
}

#[async_trait]
impl JobStore for MemoryJobs {
    async fn list_open(&self) -> StoreResult<Vec<JobPosting>> {
        let mut jobs: Vec<_> = self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.status == JobStatus::Open)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<JobPosting> {
        let uuid = parse_id("job", id)?;
        self.jobs
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id == uuid)
            .cloned()
            .ok_or_else(|| StoreError::not_found("job", id))
    }

    async fn create(&self, job: NewJob) -> StoreResult<JobPosting> {
        let now = Utc::now();
        let created = JobPosting {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title: job.title().to_owned(),
            description: job.description().to_owned(),
            location: job.location().map(str::to_owned),
            payment_details: job.payment_details().map(str::to_owned),
            contact_info: job.contact_info().to_owned(),
            status: JobStatus::Open,
            posted_by_user_id: None,
            expires_at: None,
        };
        self.jobs.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

/// Every operation fails the way a dropped database connection would.
pub struct FailingStore;

fn driver_failure() -> StoreError {
    StoreError::internal("test", sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl NewsStore for FailingStore {
    async fn list_published(&self) -> StoreResult<Vec<NewsItem>> {
        Err(driver_failure())
    }

    async fn get_by_id(&self, _id: &str) -> StoreResult<NewsItem> {
        Err(driver_failure())
    }
}

#[async_trait]
impl JobStore for FailingStore {
    async fn list_open(&self) -> StoreResult<Vec<JobPosting>> {
        Err(driver_failure())
    }

    async fn get_by_id(&self, _id: &str) -> StoreResult<JobPosting> {
        Err(driver_failure())
    }

    async fn create(&self, _job: NewJob) -> StoreResult<JobPosting> {
        Err(driver_failure())
    }
}

pub struct StaticLiveness(pub bool);

#[async_trait]
impl Liveness for StaticLiveness {
    async fn ping(&self, _timeout: Duration) -> StoreResult<()> {
        if self.0 {
            Ok(())
        } else {
            Err(StoreError::connectivity("ping failed"))
        }
    }
}

pub fn memory_state(news: Vec<NewsItem>, jobs: Vec<JobPosting>) -> AppState {
    AppState::new(
        Arc::new(MemoryNews {
            items: Mutex::new(news),
        }),
        Arc::new(MemoryJobs {
            jobs: Mutex::new(jobs),
        }),
        Arc::new(StaticLiveness(true)),
    )
}

pub fn failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        Arc::new(StaticLiveness(false)),
    )
}

pub fn with_liveness(state: AppState, healthy: bool) -> AppState {
    AppState {
        liveness: Arc::new(StaticLiveness(healthy)),
        ..state
    }
}
