//! Job postings and job creation input

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{require_min_len, ValidationError};

const MIN_TITLE_LEN: usize = 5;
const MIN_DESCRIPTION_LEN: usize = 10;
const MIN_CONTACT_LEN: usize = 5;

/// Lifecycle state of a job posting
///
/// Stored as capitalized text (`Open`, `Filled`, `Expired`). Unknown values
/// are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Open,
    Filled,
    Expired,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Filled => "Filled",
            Self::Expired => "Expired",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Open" => Self::Open,
            "Filled" => Self::Filled,
            "Expired" => Self::Expired,
            _ => Self::Other(s),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

/// Job posting record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub payment_details: Option<String>,
    pub contact_info: String,
    pub status: JobStatus,
    /// Absent until submissions are tied to authenticated users
    pub posted_by_user_id: Option<Uuid>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Body of `POST /jobs`
///
/// Server-assigned fields are not part of this type; anything else the
/// client sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub payment_details: Option<String>,
    pub contact_info: String,
}

impl CreateJobRequest {
    /// Check declared minimum lengths and produce the repository input.
    ///
    /// Values are passed through untouched; nothing is trimmed or coerced.
    pub fn validate(self) -> Result<NewJob, ValidationError> {
        require_min_len("title", &self.title, MIN_TITLE_LEN)?;
        require_min_len("description", &self.description, MIN_DESCRIPTION_LEN)?;
        require_min_len("contact_info", &self.contact_info, MIN_CONTACT_LEN)?;

        Ok(NewJob {
            title: self.title,
            description: self.description,
            location: self.location,
            payment_details: self.payment_details,
            contact_info: self.contact_info,
        })
    }
}

/// Validated job input, the only thing `JobStore::create` accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    title: String,
    description: String,
    location: Option<String>,
    payment_details: Option<String>,
    contact_info: String,
}

impl NewJob {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn payment_details(&self) -> Option<&str> {
        self.payment_details.as_deref()
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }
}
