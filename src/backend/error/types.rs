/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned from HTTP handlers and converted to responses.
 *
 * # Error Categories
 *
 * ## Validation (400)
 *
 * - A required field is missing or empty (`SharedError`)
 * - The body is not usable JSON for the endpoint (`MalformedBody`)
 *
 * ## Not Found (404)
 *
 * - No entity with the given id or slug (`NotFound`)
 *
 * There is no conflict, rate-limit or internal-error category: every handler
 * touches at most one entity and the store cannot fail.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use inkpost::backend::error::BackendError;
///
/// let err = BackendError::not_found("post", "hello-world");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// No entity matched the id or slug in the request path
    #[error("{resource} not found: {key}")]
    NotFound {
        /// Entity kind, e.g. `post`
        resource: &'static str,
        /// The id or slug that was looked up
        key: String,
    },

    /// Body could not be extracted as the expected JSON payload
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Rejection text from the extractor
        message: String,
    },

    /// Shared error (from shared module), i.e. failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(resource: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    /// Create a new malformed-body error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `MalformedBody` - 400 Bad Request
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result alias for handlers
pub type BackendResult<T> = Result<T, BackendError>;
