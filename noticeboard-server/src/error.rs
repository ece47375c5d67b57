//! Store error taxonomy
//!
//! Every repository operation returns one of these. Driver errors never
//! cross this boundary except as the `source` of [`StoreError::Internal`],
//! which is only ever logged.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing or unparseable connection string. Fatal at startup.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// The initial liveness round-trip failed. Fatal at startup.
    #[error("database unreachable: {reason}")]
    Connectivity { reason: String },

    /// A lookup by identifier matched zero rows.
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Any other store or driver failure.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub fn connectivity(reason: impl Into<String>) -> Self {
        Self::Connectivity {
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn internal(context: &'static str, source: sqlx::Error) -> Self {
        Self::Internal { context, source }
    }

    /// Classify a driver error raised while running `context`.
    ///
    /// `RowNotFound` is the driver's "no rows" signal and becomes the
    /// `NotFound` sentinel; everything else is `Internal`.
    pub fn from_sqlx(
        context: &'static str,
        resource: &'static str,
        id: &str,
        err: sqlx::Error,
    ) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found(resource, id),
            source => Self::Internal { context, source },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Short machine-readable category, safe to show to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration_error",
            Self::Connectivity { .. } => "connectivity_error",
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_sentinel() {
        let err = StoreError::from_sqlx("get job", "job", "abc", sqlx::Error::RowNotFound);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: job 'abc'");
    }

    #[test]
    fn other_driver_errors_are_internal() {
        let err = StoreError::from_sqlx("list news", "news item", "", sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
        assert_eq!(err.code(), "internal_error");
        assert!(err.to_string().starts_with("list news: "));
    }

    #[test]
    fn startup_errors_have_codes() {
        assert_eq!(
            StoreError::configuration("empty").code(),
            "configuration_error"
        );
        assert_eq!(
            StoreError::connectivity("timeout").code(),
            "connectivity_error"
        );
    }
}
