//! Job endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::models::{CreateJobRequest, JobPosting};
use crate::state::AppState;

/// GET /jobs - open postings, newest first
async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobPosting>>, ApiError> {
    let jobs = state.jobs.list_open().await?;
    tracing::debug!(count = jobs.len(), "Returning open jobs");
    Ok(Json(jobs))
}

/// GET /jobs/{id}
async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPosting>, ApiError> {
    let job = state.jobs.get_by_id(&id).await?;
    Ok(Json(job))
}

/// POST /jobs - create a new posting
///
/// Invalid bodies are rejected here and never reach the store.
async fn create_job(
    State(state): State<AppState>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JobPosting>), ApiError> {
    let Json(req) = payload?;
    let job = req.validate()?;

    let created = state.jobs.create(job).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Job routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/{id}", get(get_job))
}
