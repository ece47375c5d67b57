//! noticeboard-server: persistence layer and HTTP API for the community noticeboard
//!
//! Serves news items and job postings as JSON, backed by PostgreSQL.
//! The pool is built once at startup (see [`db::pool::connect`]) and injected
//! into the repositories; handlers only ever see the [`db::repos`] traits.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::{StoreError, StoreResult};
pub use state::AppState;
