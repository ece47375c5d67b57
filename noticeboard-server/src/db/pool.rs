//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit limits. Deployments usually sit behind a
//! transaction-mode pooler (PgBouncer, Supabase pooler), which may hand the
//! physical backend to another client whenever a ReadyForQuery reports the
//! session idle. Two rules keep every statement on one backend:
//!
//! - no named statements: the statement cache is disabled here and the
//!   repositories issue every query with `persistent(false)`
//! - parameterized statements run inside a transaction
//!   ([`crate::db::repos`]), because sqlx syncs between Parse and Bind;
//!   parameterless statements (ping, DDL) use the simple query protocol

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::{StoreError, StoreResult};

/// Parse the connection string and turn off statement caching.
///
/// # Errors
///
/// Returns `StoreError::Configuration` if the URL is empty or unparseable.
pub fn connect_options(url: &str) -> StoreResult<PgConnectOptions> {
    if url.trim().is_empty() {
        return Err(StoreError::configuration("database URL is empty"));
    }

    let options = PgConnectOptions::from_str(url)
        .map_err(|e| StoreError::configuration(format!("invalid database URL: {e}")))?;

    Ok(options.statement_cache_capacity(0))
}

/// Pool sizing and recycling policy from config.
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .max_lifetime(Some(config.max_lifetime))
        .idle_timeout(Some(config.idle_timeout))
        .acquire_timeout(config.connect_timeout)
}

/// Create the process-wide pool and verify the store is reachable.
///
/// Call once at startup and hand clones of the pool to the repositories.
///
/// # Errors
///
/// - `StoreError::Configuration` for a bad connection string
/// - `StoreError::Connectivity` if the liveness round-trip fails; the pool
///   is closed before returning
///
/// # Example
///
/// ```ignore
/// let pool = connect(&DatabaseConfig::new("postgres://localhost/noticeboard")).await?;
/// ```
pub async fn connect(config: &DatabaseConfig) -> StoreResult<PgPool> {
    let options = connect_options(&config.url)?;
    tracing::info!(
        host = options.get_host(),
        port = options.get_port(),
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Creating database pool (statement cache disabled)"
    );

    let pool = pool_options(config).connect_lazy_with(options);

    if let Err(e) = ping(&pool, config.ping_timeout).await {
        tracing::error!(error = %e, "Database liveness check failed");
        pool.close().await;
        return Err(StoreError::connectivity(e.to_string()));
    }

    tracing::info!("Database connection established");
    Ok(pool)
}

/// Round-trip `SELECT 1`, bounded by `timeout`.
pub async fn ping(pool: &PgPool, timeout: Duration) -> StoreResult<()> {
    let query = sqlx::raw_sql("SELECT 1").execute(pool);

    match tokio::time::timeout(timeout, query).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(StoreError::internal("ping", e)),
        Err(_) => Err(StoreError::connectivity(format!(
            "no response within {}s",
            timeout.as_secs_f32()
        ))),
    }
}

/// Release every connection. Call once at shutdown.
pub async fn close(pool: &PgPool) {
    tracing::info!("Closing database connection pool");
    pool.close().await;
}
