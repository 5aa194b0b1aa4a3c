//! Blog Module
//!
//! This module contains the data structures for the blog:
//!
//! - `User` - An account with a role and a profile bio
//! - `Post` - An article, a draft until published
//! - `Category` - A named bucket posts can point at
//! - `Comment` - A reader comment attached to a post
//!
//! Each entity comes with the request and response payloads its endpoints
//! exchange. References between entities (`author_id`, `category_id`,
//! `post_id`, `user_id`) are plain ids and are never checked for existence.
//!
//! # Usage
//!
//! ```rust
//! use inkpost::shared::blog::{slugify, Post, Category, Comment, User};
//!
//! assert_eq!(slugify("Hello World"), "hello-world");
//! ```

use serde::{Deserialize, Serialize};

pub mod category;
pub mod comment;
pub mod post;
pub mod user;

/// Identifier assigned by the store, starting at 1 per entity type
pub type EntityId = u64;

/// Identity every mock-authenticated request acts as
pub const MOCK_USER_ID: EntityId = 1;

/// Generic acknowledgement body, e.g. `{"status":"updated","id":3}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }
}

// Re-export all types
pub use category::{Category, CreateCategoryRequest, ListCategoriesResponse};
pub use comment::{
    Comment, CommentSummary, CreateCommentRequest, CreateCommentResponse, ListCommentsResponse,
};
pub use post::{
    slugify, CreatePostRequest, CreatePostResponse, ListPostsResponse, Post, PostSummary,
    UpdatePostRequest,
};
pub use user::{Role, UpdateUserRequest, User, UserProfile};
