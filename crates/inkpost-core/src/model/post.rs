use serde::{Deserialize, Serialize};

use super::comment::Comment;

/// Primary key of a post, assigned by the store on insert
pub type PostId = i64;

/// Post - a blog entry with a title and content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-generated identifier, immutable once assigned
    pub id: PostId,

    /// Headline shown on the listing and the post page
    pub title: String,

    /// Body text
    pub content: String,
}

impl Post {
    /// Create a Post from its persisted fields
    pub fn new(id: PostId, title: String, content: String) -> Self {
        Self { id, title, content }
    }
}

/// A post together with its comments, oldest first
///
/// This is what the post page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
}

impl PostDetail {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// Validated title and content for creating or replacing a post
///
/// Only obtainable through [`crate::rules::validation::validate_post`], so
/// holding one means both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl PostDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
