//! Read-only blog queries

use inkpost_core::{BlogError, Post, PostDetail, PostId};
use inkpost_store::errors::Result;
use inkpost_store::SqliteRepo;
use rusqlite::Connection;

use super::{logged, OP_GET_POST, OP_LIST_POSTS, OP_VIEW_POST};

/// All posts, in storage order
pub fn list_posts(conn: &Connection) -> Result<Vec<Post>> {
    logged(OP_LIST_POSTS, None, || SqliteRepo::list_posts(conn))
}

/// A single post without its comments (used to prefill the edit form)
///
/// # Errors
/// * `NotFound` - If no post has this id
pub fn get_post(conn: &Connection, post_id: PostId) -> Result<Post> {
    logged(OP_GET_POST, Some(post_id), || {
        SqliteRepo::get_post(conn, post_id)?
            .ok_or_else(|| BlogError::PostNotFound { post_id }.into())
    })
}

/// A post with its comments, oldest first
///
/// # Errors
/// * `NotFound` - If no post has this id
pub fn view_post(conn: &Connection, post_id: PostId) -> Result<PostDetail> {
    logged(OP_VIEW_POST, Some(post_id), || {
        SqliteRepo::get_post_detail(conn, post_id)?
            .ok_or_else(|| BlogError::PostNotFound { post_id }.into())
    })
}
