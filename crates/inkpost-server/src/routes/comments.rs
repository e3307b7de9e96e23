use axum::extract::State;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use super::{recover, PostIdParam, Retry};
use crate::error::AppError;
use crate::flash::Flash;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub content: Option<String>,
}

/// Attach a comment and return to the post page
pub async fn add(
    State(state): State<AppState>,
    PostIdParam(post_id): PostIdParam,
    flash: Flash,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let result = state
        .with_conn(move |conn| inkpost_engine::add_comment(conn, post_id, form.content))
        .await;

    let view = format!("/post/{}", post_id);
    match result {
        Ok(_) => Ok(flash.success("Comment added successfully.").redirect(&view)),
        Err(err) => recover(
            flash,
            err,
            Some(Retry {
                notice: "Comment cannot be empty.",
                to: &view,
            }),
        ),
    }
}
