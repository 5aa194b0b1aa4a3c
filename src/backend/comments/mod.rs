//! Comments Backend Module

pub mod handlers;

pub use handlers::{create_comment, list_comments};
