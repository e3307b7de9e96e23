//! Command orchestration layer.
//!
//! Operation names double as the `op` field of the structured log events.

use inkpost_core::{log_op_end, log_op_error, log_op_start, PostId};
use inkpost_store::Result;
use std::time::Instant;

pub mod comment_commands;
pub mod engine_query;
pub mod post_commands;

pub const OP_LIST_POSTS: &str = "list_posts";
pub const OP_VIEW_POST: &str = "view_post";
pub const OP_GET_POST: &str = "get_post";
pub const OP_CREATE_POST: &str = "create_post";
pub const OP_UPDATE_POST: &str = "update_post";
pub const OP_DELETE_POST: &str = "delete_post";
pub const OP_ADD_COMMENT: &str = "add_comment";

/// Run `f` bracketed by start and end/end_error events for `op`
pub(crate) fn logged<T>(
    op: &'static str,
    post_id: Option<PostId>,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let started = Instant::now();
    log_op_start!(op, post_id = post_id);

    let result = f();
    let duration_ms = started.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms, post_id = post_id);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms, post_id = post_id);
        }
    }

    result
}
