//! News items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a news item
///
/// Stored as lowercase text. Values this crate does not know are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NewsStatus {
    Published,
    Draft,
    Archived,
    Other(String),
}

impl NewsStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for NewsStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "published" => Self::Published,
            "draft" => Self::Draft,
            "archived" => Self::Archived,
            _ => Self::Other(s),
        }
    }
}

impl From<NewsStatus> for String {
    fn from(status: NewsStatus) -> Self {
        match status {
            NewsStatus::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

/// News item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: Option<String>,
    pub published_at: DateTime<Utc>,
    pub status: NewsStatus,
}
