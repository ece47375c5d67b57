//! Validation error types

use std::fmt;

/// Validation error for client input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is shorter than its declared minimum (in characters)
    TooShort { field: &'static str, min: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a required text field against its minimum length.
pub(crate) fn require_min_len(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooShort {
            field: "title",
            min: 5,
        };
        assert_eq!(err.to_string(), "title must be at least 5 characters");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        assert!(require_min_len("title", "\u{e9}\u{e9}\u{e9}\u{e9}", 5).is_err());
        assert!(require_min_len("title", "\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}", 5).is_ok());
    }
}
