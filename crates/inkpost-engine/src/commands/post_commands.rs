//! Post write operations

use inkpost_core::rules::validation::validate_post;
use inkpost_core::{BlogError, PostId};
use inkpost_store::errors::{from_rusqlite, Result};
use inkpost_store::SqliteRepo;
use rusqlite::Connection;

use super::{logged, OP_CREATE_POST, OP_DELETE_POST, OP_UPDATE_POST};

/// Create a post from submitted form fields
///
/// # Returns
/// The generated post id
///
/// # Errors
/// * `InvalidInput` - If title or content is absent or empty; nothing is written
/// * `Persistence` - If the insert fails
pub fn create_post(
    conn: &mut Connection,
    title: Option<String>,
    content: Option<String>,
) -> Result<PostId> {
    logged(OP_CREATE_POST, None, || {
        let draft = validate_post(title, content)?;

        let tx = conn.transaction().map_err(from_rusqlite)?;
        let post_id = SqliteRepo::insert_post(&tx, &draft)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(post_id, "Post created");
        Ok(post_id)
    })
}

/// Replace a post's title and content
///
/// The post is looked up before the form is validated, so a missing post
/// reports not-found even when the submission is also invalid.
///
/// # Errors
/// * `NotFound` - If no post has this id
/// * `InvalidInput` - If title or content is absent or empty; the post is left unchanged
/// * `Persistence` - If the update fails
pub fn update_post(
    conn: &mut Connection,
    post_id: PostId,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    logged(OP_UPDATE_POST, Some(post_id), || {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        if SqliteRepo::get_post(&tx, post_id)?.is_none() {
            return Err(BlogError::PostNotFound { post_id }.into());
        }
        let draft = validate_post(title, content)?;

        if !SqliteRepo::update_post(&tx, post_id, &draft)? {
            return Err(BlogError::PostNotFound { post_id }.into());
        }
        tx.commit().map_err(from_rusqlite)?;

        Ok(())
    })
}

/// Delete a post and every comment attached to it, atomically
///
/// # Returns
/// The number of comments removed with the post
///
/// # Errors
/// * `NotFound` - If no post has this id
/// * `Persistence` - If the delete fails; nothing is removed
pub fn delete_post(conn: &mut Connection, post_id: PostId) -> Result<usize> {
    logged(OP_DELETE_POST, Some(post_id), || {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        let Some(comments_removed) = SqliteRepo::delete_post(&tx, post_id)? else {
            return Err(BlogError::PostNotFound { post_id }.into());
        };
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(post_id, comments_removed, "Post deleted");
        Ok(comments_removed)
    })
}
