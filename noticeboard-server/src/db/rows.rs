//! Row mapping
//!
//! Each record has one projection list. Query text is built from it and the
//! `FromRow` impls destructure the same array, so the SELECT list and the
//! fields being read cannot drift apart.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::{JobPosting, NewsItem};

/// `news` columns, in `NewsItem` field order
pub const NEWS_COLUMNS: [&str; 7] = [
    "id",
    "created_at",
    "updated_at",
    "title",
    "content",
    "published_at",
    "status",
];

/// `jobs` columns, in `JobPosting` field order
pub const JOB_COLUMNS: [&str; 11] = [
    "id",
    "created_at",
    "updated_at",
    "title",
    "description",
    "location",
    "payment_details",
    "contact_info",
    "status",
    "posted_by_user_id",
    "expires_at",
];

/// Comma-separated projection for a SELECT or RETURNING clause.
pub fn projection(columns: &[&str]) -> String {
    columns.join(", ")
}

impl<'r> FromRow<'r, PgRow> for NewsItem {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let [id, created_at, updated_at, title, content, published_at, status] = NEWS_COLUMNS;

        Ok(Self {
            id: row.try_get(id)?,
            created_at: row.try_get(created_at)?,
            updated_at: row.try_get(updated_at)?,
            title: row.try_get(title)?,
            content: row.try_get(content)?,
            published_at: row.try_get(published_at)?,
            status: row.try_get::<String, _>(status)?.into(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for JobPosting {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let [
            id,
            created_at,
            updated_at,
            title,
            description,
            location,
            payment_details,
            contact_info,
            status,
            posted_by_user_id,
            expires_at,
        ] = JOB_COLUMNS;

        Ok(Self {
            id: row.try_get(id)?,
            created_at: row.try_get(created_at)?,
            updated_at: row.try_get(updated_at)?,
            title: row.try_get(title)?,
            description: row.try_get(description)?,
            location: row.try_get(location)?,
            payment_details: row.try_get(payment_details)?,
            contact_info: row.try_get(contact_info)?,
            status: row.try_get::<String, _>(status)?.into(),
            posted_by_user_id: row.try_get(posted_by_user_id)?,
            expires_at: row.try_get(expires_at)?,
        })
    }
}

/// Map every row, skipping (and logging) the ones that fail.
///
/// One malformed row should not hide an otherwise valid list. The number of
/// skipped rows is logged once per call.
pub fn map_rows<T>(rows: &[PgRow], resource: &'static str) -> Vec<T>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    let mut items = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (index, row) in rows.iter().enumerate() {
        match T::from_row(row) {
            Ok(item) => items.push(item),
            Err(e) => {
                skipped += 1;
                tracing::warn!(resource, index, error = %e, "Skipping row that failed to map");
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            resource,
            skipped,
            returned = items.len(),
            "List returned with skipped rows"
        );
    }

    items
}
