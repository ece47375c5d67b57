//! Route handlers organized by resource

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod jobs;
pub mod news;

/// Versioned resource routes, nested under `/api/v1`
pub fn api_router() -> Router<AppState> {
    Router::new().merge(news::router()).merge(jobs::router())
}
