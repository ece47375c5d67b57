//! HTTP server layer
//!
//! Axum server with:
//! - CORS (configured origin list)
//! - Request tracing
//! - Request timeout (drops the in-flight query and frees its connection)
//! - Graceful shutdown, then pool release
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerError};
