//! Database layer - connection pool, row mapping and repositories
//!
//! # Design Principles
//!
//! - One pool per process, built at startup and closed at shutdown
//! - No server-side statement caching (safe behind a transaction-mode pooler)
//! - Every query is parameterized; identifiers are never interpolated
//! - Single-statement writes only

pub mod pool;
pub mod repos;
pub mod rows;
pub mod schema;

pub use pool::{close, connect};
pub use repos::{JobRepo, JobStore, Liveness, NewsRepo, NewsStore};
