//! Health check endpoint

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /health - pings the store
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.liveness.ping(PING_TIMEOUT).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "OK",
                database: "OK",
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check DB ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "Error",
                    database: "Error",
                }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
