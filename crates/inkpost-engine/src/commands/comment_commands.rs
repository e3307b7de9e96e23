//! Comment write operations

use inkpost_core::rules::validation::validate_comment;
use inkpost_core::{BlogError, PostId};
use inkpost_store::errors::{from_rusqlite, Result};
use inkpost_store::SqliteRepo;
use rusqlite::Connection;

use super::{logged, OP_ADD_COMMENT};

/// Attach a comment to an existing post
///
/// # Returns
/// The generated comment id
///
/// # Errors
/// * `NotFound` - If no post has this id (checked before the content)
/// * `InvalidInput` - If content is absent or empty
/// * `Persistence` - If the insert fails
pub fn add_comment(conn: &mut Connection, post_id: PostId, content: Option<String>) -> Result<i64> {
    logged(OP_ADD_COMMENT, Some(post_id), || {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        if SqliteRepo::get_post(&tx, post_id)?.is_none() {
            return Err(BlogError::PostNotFound { post_id }.into());
        }
        let draft = validate_comment(post_id, content)?;

        let comment_id = SqliteRepo::insert_comment(&tx, &draft)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(post_id, comment_id, "Comment added");
        Ok(comment_id)
    })
}
