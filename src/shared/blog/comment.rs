//! Comment Data Structure
//!
//! Comments hang off a post by id. The post is not required to exist.

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::shared::error::{require, SharedError};

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: EntityId,
    pub post_id: EntityId,
    pub user_id: EntityId,
    pub content: String,
    pub likes: u64,
    pub is_reported: bool,
}

impl Comment {
    pub fn summary(&self) -> CommentSummary {
        CommentSummary {
            id: self.id,
            user_id: self.user_id,
            content: self.content.clone(),
        }
    }
}

/// Entry of a post's comment listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentSummary {
    pub id: EntityId,
    pub user_id: EntityId,
    pub content: String,
}

/// Response type for listing comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentsResponse {
    pub comments: Vec<CommentSummary>,
}

/// Request type for creating a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
}

impl CreateCommentRequest {
    /// Build an unsaved comment on `post_id` authored by `user_id`
    pub fn into_comment(self, post_id: EntityId, user_id: EntityId) -> Result<Comment, SharedError> {
        let content = require("content", self.content.as_deref())?.to_string();
        Ok(Comment {
            id: 0,
            post_id,
            user_id,
            content,
            likes: 0,
            is_reported: false,
        })
    }
}

/// Response type for creating a comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCommentResponse {
    pub id: EntityId,
    pub post_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_comment_defaults() {
        let comment = CreateCommentRequest { content: Some("Nice".into()) }
            .into_comment(9, 1)
            .unwrap();
        assert_eq!(comment.post_id, 9);
        assert_eq!(comment.user_id, 1);
        assert_eq!(comment.likes, 0);
        assert!(!comment.is_reported);
    }

    #[test]
    fn test_content_is_required() {
        let err = CreateCommentRequest::default().into_comment(1, 1).unwrap_err();
        assert_eq!(err, SharedError::missing("content"));
    }
}
