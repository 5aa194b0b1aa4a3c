//! Shared Error Types
//!
//! This module defines error types that are shared between the server and its
//! clients. They describe bad input, independent of how it arrived.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field is missing or empty
//!
//! # Usage
//!
//! ```rust
//! use inkpost::shared::error::SharedError;
//!
//! let error = SharedError::missing("title");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Shared error types that can occur in both server and client code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validation error for a field that is absent or empty
    pub fn missing(field: impl Into<String>) -> Self {
        Self::validation(field, "is required")
    }
}

/// Require a field to be present and non-empty.
///
/// Presence is the only check performed on input; content is not sanitised.
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, SharedError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SharedError::missing(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        let SharedError::ValidationError { field, message } = error;
        assert_eq!(field, "email");
        assert_eq!(message, "Invalid email format");
    }

    #[test]
    fn test_missing_field_display() {
        let display = SharedError::missing("content").to_string();
        assert!(display.contains("Validation error"));
        assert!(display.contains("content"));
    }

    #[test]
    fn test_require() {
        assert_eq!(require("name", Some("Tech")), Ok("Tech"));
        assert_eq!(require("name", Some("")), Err(SharedError::missing("name")));
        assert_eq!(require("name", None), Err(SharedError::missing("name")));
    }

    #[test]
    fn test_require_keeps_whitespace() {
        // Presence only; a blank-but-nonempty value passes.
        assert_eq!(require("name", Some(" ")), Ok(" "));
    }
}
