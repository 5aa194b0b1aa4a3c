//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` and extractor-rejection conversions
//!
//! # Error Types
//!
//! - `NotFound` - No entity with the requested id or slug (404)
//! - `MalformedBody` - Request body is not the expected JSON (400)
//! - `SharedError` - Validation failure from the shared module (400)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, BackendResult};
