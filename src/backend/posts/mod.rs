//! Posts Backend Module
//!
//! Handlers for creating, reading, editing, publishing and deleting posts.
//! New posts start as drafts; only published posts appear in the listing,
//! but any post can be fetched directly by slug.

pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_published, publish_post, update_post};
