use crate::errors::{BlogError, Result};
use crate::model::{CommentDraft, PostDraft, PostId};

/// Validate a submitted post form
///
/// Both fields must be present and non-empty. Whitespace is kept verbatim:
/// a field is only rejected when it is absent or the empty string.
///
/// # Errors
/// * `MissingPostFields` - If either field is absent or empty
pub fn validate_post(title: Option<String>, content: Option<String>) -> Result<PostDraft> {
    match (non_empty(title), non_empty(content)) {
        (Some(title), Some(content)) => Ok(PostDraft { title, content }),
        _ => Err(BlogError::MissingPostFields),
    }
}

/// Validate a submitted comment form for the given post
///
/// # Errors
/// * `EmptyComment` - If content is absent or empty
pub fn validate_comment(post_id: PostId, content: Option<String>) -> Result<CommentDraft> {
    let content = non_empty(content).ok_or(BlogError::EmptyComment)?;
    Ok(CommentDraft { post_id, content })
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
