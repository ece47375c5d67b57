//! Domain records and client input
//!
//! Records mirror the stored rows. Optional columns are `Option` so that
//! "absent" serializes as `null` and stays distinct from an empty string.

pub mod job;
pub mod news;
pub mod validation;

pub use job::{CreateJobRequest, JobPosting, JobStatus, NewJob};
pub use news::{NewsItem, NewsStatus};
pub use validation::ValidationError;
