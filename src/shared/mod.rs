//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and its clients. These types are used for serialization and
//! communication over the JSON API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that compile without
//! the `ssr` feature. All payload types derive `Serialize`/`Deserialize`.

/// Blog entities and their request/response payloads
pub mod blog;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use blog::{Category, Comment, EntityId, Post, Role, User, MOCK_USER_ID};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
