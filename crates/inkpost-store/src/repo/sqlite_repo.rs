//! SQLite repository implementation
//!
//! Prepared statements for posts and comments. Functions take a plain
//! `&Connection`; callers that need atomicity pass a `Transaction`, which
//! derefs to one.

use crate::errors::{from_rusqlite, Result};
use inkpost_core::model::{Comment, CommentDraft, Post, PostDetail, PostDraft, PostId};
use rusqlite::{Connection, OptionalExtension, Row};

/// SQLite repository for posts and comments
pub struct SqliteRepo;

impl SqliteRepo {
    /// List every post in storage order
    pub fn list_posts(conn: &Connection) -> Result<Vec<Post>> {
        let mut stmt = conn
            .prepare_cached("SELECT id, title, content FROM post ORDER BY id")
            .map_err(from_rusqlite)?;

        let posts = stmt
            .query_map([], post_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(posts)
    }

    /// Insert a new post and return its generated id
    pub fn insert_post(conn: &Connection, draft: &PostDraft) -> Result<PostId> {
        conn.execute(
            "INSERT INTO post (title, content) VALUES (?1, ?2)",
            rusqlite::params![draft.title(), draft.content()],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a post by id
    pub fn get_post(conn: &Connection, post_id: PostId) -> Result<Option<Post>> {
        let mut stmt = conn
            .prepare_cached("SELECT id, title, content FROM post WHERE id = ?")
            .map_err(from_rusqlite)?;

        stmt.query_row([post_id], post_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Get a post together with its comments
    pub fn get_post_detail(conn: &Connection, post_id: PostId) -> Result<Option<PostDetail>> {
        let Some(post) = Self::get_post(conn, post_id)? else {
            return Ok(None);
        };
        let comments = Self::list_comments(conn, post_id)?;
        Ok(Some(PostDetail { post, comments }))
    }

    /// Replace a post's title and content
    ///
    /// Returns `false` when no post has this id.
    pub fn update_post(conn: &Connection, post_id: PostId, draft: &PostDraft) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE post SET title = ?1, content = ?2 WHERE id = ?3",
                rusqlite::params![draft.title(), draft.content(), post_id],
            )
            .map_err(from_rusqlite)?;

        Ok(changed == 1)
    }

    /// Delete a post and its comments
    ///
    /// Comments are removed explicitly before the post so the cascade holds
    /// even on a connection opened without `foreign_keys`. Run inside a
    /// transaction. Returns the number of comments removed, or `None` when
    /// no post has this id.
    pub fn delete_post(conn: &Connection, post_id: PostId) -> Result<Option<usize>> {
        let comments_removed = conn
            .execute("DELETE FROM comment WHERE post_id = ?", [post_id])
            .map_err(from_rusqlite)?;

        let posts_removed = conn
            .execute("DELETE FROM post WHERE id = ?", [post_id])
            .map_err(from_rusqlite)?;

        Ok((posts_removed == 1).then_some(comments_removed))
    }

    /// Insert a comment and return its generated id
    pub fn insert_comment(conn: &Connection, draft: &CommentDraft) -> Result<i64> {
        conn.execute(
            "INSERT INTO comment (post_id, content) VALUES (?1, ?2)",
            rusqlite::params![draft.post_id(), draft.content()],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// List a post's comments, oldest first
    pub fn list_comments(conn: &Connection, post_id: PostId) -> Result<Vec<Comment>> {
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, post_id, content FROM comment WHERE post_id = ? ORDER BY id",
            )
            .map_err(from_rusqlite)?;

        let comments = stmt
            .query_map([post_id], |row| {
                Ok(Comment::new(row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(comments)
    }

    /// Count a post's comments
    pub fn count_comments(conn: &Connection, post_id: PostId) -> Result<usize> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM comment WHERE post_id = ?",
                [post_id],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;

        Ok(count as usize)
    }
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post::new(row.get(0)?, row.get(1)?, row.get(2)?))
}
