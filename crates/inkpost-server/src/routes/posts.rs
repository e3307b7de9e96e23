//! Post pages and post writes

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use minijinja::context;
use serde::Deserialize;

use super::{recover, render_page, PostIdParam, Retry};
use crate::error::AppError;
use crate::flash::Flash;
use crate::state::AppState;
use crate::templates;

/// Submitted create/update form. Absent fields stay `None` so validation
/// can reject them alongside empty ones.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn home(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let posts = state
        .with_conn(|conn| inkpost_engine::list_posts(conn))
        .await?;

    let (messages, clear) = flash.drain();
    render_page(
        &state,
        templates::HOME,
        clear,
        context! { posts => posts, messages => messages },
    )
}

pub async fn create_form(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let (messages, clear) = flash.drain();
    render_page(&state, templates::CREATE, clear, context! { messages => messages })
}

pub async fn create(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let result = state
        .with_conn(move |conn| inkpost_engine::create_post(conn, form.title, form.content))
        .await;

    match result {
        Ok(_) => Ok(flash.success("Post created successfully.").redirect("/")),
        Err(err) => recover(
            flash,
            err,
            Some(Retry {
                notice: "Title and content are required.",
                to: "/post/create",
            }),
        ),
    }
}

pub async fn view(
    State(state): State<AppState>,
    PostIdParam(post_id): PostIdParam,
    flash: Flash,
) -> Result<Response, AppError> {
    let detail = match state
        .with_conn(move |conn| inkpost_engine::view_post(conn, post_id))
        .await
    {
        Ok(detail) => detail,
        Err(err) => return recover(flash, err, None),
    };

    let (messages, clear) = flash.drain();
    render_page(
        &state,
        templates::VIEW,
        clear,
        context! { post => detail, messages => messages },
    )
}

pub async fn update_form(
    State(state): State<AppState>,
    PostIdParam(post_id): PostIdParam,
    flash: Flash,
) -> Result<Response, AppError> {
    let post = match state
        .with_conn(move |conn| inkpost_engine::get_post(conn, post_id))
        .await
    {
        Ok(post) => post,
        Err(err) => return recover(flash, err, None),
    };

    let (messages, clear) = flash.drain();
    render_page(
        &state,
        templates::UPDATE,
        clear,
        context! { post => post, messages => messages },
    )
}

pub async fn update(
    State(state): State<AppState>,
    PostIdParam(post_id): PostIdParam,
    flash: Flash,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let result = state
        .with_conn(move |conn| {
            inkpost_engine::update_post(conn, post_id, form.title, form.content)
        })
        .await;

    match result {
        Ok(()) => Ok(flash
            .success("Post updated successfully.")
            .redirect(&format!("/post/{}", post_id))),
        Err(err) => recover(
            flash,
            err,
            Some(Retry {
                notice: "Title and content cannot be empty.",
                to: &format!("/post/{}/update", post_id),
            }),
        ),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    PostIdParam(post_id): PostIdParam,
    flash: Flash,
) -> Result<Response, AppError> {
    let result = state
        .with_conn(move |conn| inkpost_engine::delete_post(conn, post_id))
        .await;

    match result {
        Ok(_) => Ok(flash.success("Post deleted successfully.").redirect("/")),
        Err(err) => recover(flash, err, None),
    }
}
