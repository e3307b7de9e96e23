use serde::{Deserialize, Serialize};

use super::post::PostId;

/// Comment - a reply attached to exactly one Post
///
/// Comments are never edited and never deleted on their own; they go away
/// together with their post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Store-generated identifier
    pub id: i64,

    /// Owning post
    pub post_id: PostId,

    pub content: String,
}

impl Comment {
    /// Create a Comment from its persisted fields
    pub fn new(id: i64, post_id: PostId, content: String) -> Self {
        Self {
            id,
            post_id,
            content,
        }
    }
}

/// Validated comment content addressed to a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub(crate) post_id: PostId,
    pub(crate) content: String,
}

impl CommentDraft {
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
