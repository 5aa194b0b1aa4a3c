//! Post Data Structure
//!
//! Represents a blog post and the payloads of the post endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::shared::error::{require, SharedError};

/// Derive a slug from a post title.
///
/// Lowercases the title and replaces every space with `-`. Nothing else is
/// touched: punctuation survives, runs of spaces become runs of dashes, and two
/// posts with the same title share a slug.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Store-assigned id
    pub id: EntityId,
    /// Author reference, not validated
    pub author_id: EntityId,
    pub title: String,
    /// Fixed at creation; later title edits leave it alone
    pub slug: String,
    pub content: String,
    /// `false` while the post is a draft
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    /// Category reference, not validated
    pub category_id: Option<EntityId>,
    pub views: u64,
    pub likes: u64,
}

impl Post {
    /// Create an unsaved draft. The id is assigned when the store accepts it.
    pub fn draft(author_id: EntityId, title: String, content: String) -> Self {
        Self {
            id: 0,
            author_id,
            slug: slugify(&title),
            title,
            content,
            is_published: false,
            created_at: Utc::now(),
            tags: Vec::new(),
            category_id: None,
            views: 0,
            likes: 0,
        }
    }

    /// Projection used by the public listing
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Entry of the published-post listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostSummary {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
}

/// Response type for listing published posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsResponse {
    pub posts: Vec<PostSummary>,
}

/// Request type for creating a post
///
/// Fields are optional at the wire level so that a missing field reaches
/// `into_draft` and is reported as a validation error rather than a JSON
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<EntityId>,
    pub tags: Option<Vec<String>>,
}

impl CreatePostRequest {
    /// Validate presence of title and content and build a draft
    pub fn into_draft(self, author_id: EntityId) -> Result<Post, SharedError> {
        let title = require("title", self.title.as_deref())?.to_string();
        let content = require("content", self.content.as_deref())?.to_string();

        let mut post = Post::draft(author_id, title, content);
        post.category_id = self.category_id;
        post.tags = self.tags.unwrap_or_default();
        Ok(post)
    }
}

/// Response type for creating a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePostResponse {
    pub id: EntityId,
    pub slug: String,
}

/// Partial update of a post.
///
/// `None` leaves the field untouched; `Some` overwrites it, including with an
/// empty value. `tags` replaces the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdatePostRequest {
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
    }
}
