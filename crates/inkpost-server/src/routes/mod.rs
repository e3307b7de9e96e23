//! HTTP routes
//!
//! Every write answers with a redirect that carries a flash notice. Pages
//! drain pending notices when they render.

use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use inkpost_core::errors::{ExError, ExErrorKind};
use inkpost_core::PostId;
use inkpost_core_types::RequestId;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::flash::{ClearFlash, Flash};
use crate::state::AppState;

mod comments;
mod posts;

pub(crate) const POST_NOT_FOUND: &str = "Post not found.";

/// Build the application router over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(posts::home))
        .route("/post/create", get(posts::create_form).post(posts::create))
        .route("/post/:post_id", get(posts::view))
        .route(
            "/post/:post_id/update",
            get(posts::update_form).post(posts::update),
        )
        .route("/post/:post_id/delete", post(posts::delete))
        .route("/post/:post_id/comment", post(comments::add))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %RequestId::new(),
                )
            }),
        )
        .with_state(state)
}

/// Post id taken from the `:post_id` segment
///
/// Only plain decimal digits match; anything else is a 404, the same as a
/// route that does not exist.
#[derive(Debug, Clone, Copy)]
pub struct PostIdParam(pub PostId);

#[async_trait]
impl<S> FromRequestParts<S> for PostIdParam
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        parse_post_id(&raw)
            .map(PostIdParam)
            .ok_or(StatusCode::NOT_FOUND)
    }
}

fn parse_post_id(raw: &str) -> Option<PostId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Where a rejected form submission is sent back to, and with what notice
pub(crate) struct Retry<'a> {
    pub notice: &'a str,
    pub to: &'a str,
}

/// Turn a recoverable failure into a notice plus redirect
///
/// Not-found always returns to the listing. Validation failures follow
/// `retry`. Anything else is a server error.
pub(crate) fn recover(flash: Flash, err: ExError, retry: Option<Retry<'_>>) -> Result<Response, AppError> {
    match (err.kind(), retry) {
        (ExErrorKind::NotFound, _) => Ok(flash.danger(POST_NOT_FOUND).redirect("/")),
        (ExErrorKind::InvalidInput, Some(retry)) => Ok(flash.danger(retry.notice).redirect(retry.to)),
        _ => Err(AppError(err)),
    }
}

/// Render a page and expire the notices it shows
pub(crate) fn render_page<C: Serialize>(
    state: &AppState,
    name: &str,
    clear: ClearFlash,
    ctx: C,
) -> Result<Response, AppError> {
    let page = state.templates.render(name, ctx)?;
    Ok((clear, page).into_response())
}
