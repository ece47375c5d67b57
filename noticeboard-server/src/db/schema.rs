//! Table bootstrap for local development and integration tests
//!
//! Production schemas may be owned elsewhere; every statement here is
//! idempotent so running it against an existing database is harmless.
//! Statements go over the simple query protocol, so they need no
//! transaction to stay on one pooled backend.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

const STATEMENTS: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS news (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        title TEXT NOT NULL,
        content TEXT,
        published_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        status TEXT NOT NULL DEFAULT 'draft'
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS news_status_published_at_idx
        ON news (status, published_at DESC)
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        location TEXT,
        payment_details TEXT,
        contact_info TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'Open',
        posted_by_user_id UUID,
        expires_at TIMESTAMPTZ
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS jobs_status_created_at_idx
        ON jobs (status, created_at DESC)
    "#,
];

/// Create the `news` and `jobs` tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Ensuring noticeboard schema...");

    for statement in STATEMENTS {
        sqlx::raw_sql(statement)
            .execute(pool)
            .await
            .map_err(|e| StoreError::internal("ensure schema", e))?;
    }

    tracing::info!("Schema ready");
    Ok(())
}
