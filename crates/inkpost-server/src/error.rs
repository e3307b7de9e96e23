//! Server-side failures rendered as HTTP responses
//!
//! Only errors a handler cannot turn into a flash notice end up here:
//! storage, template and runtime failures. They are logged with their
//! stable code and answered with a bare 500 page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use inkpost_core::errors::{ExError, ExErrorKind};

const INTERNAL_ERROR_PAGE: &str = "<!doctype html>\
<html><head><title>Internal Server Error</title></head>\
<body><h1>Internal Server Error</h1>\
<p>The server could not complete your request.</p></body></html>";

#[derive(Debug)]
pub struct AppError(pub ExError);

impl AppError {
    pub fn kind(&self) -> ExErrorKind {
        self.0.kind()
    }
}

impl From<ExError> for AppError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        Self(
            ExError::new(ExErrorKind::Template)
                .with_op("render")
                .with_message(err.to_string()),
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(
            err_kind = ?self.0.kind(),
            err_code = self.0.code(),
            err_message = %self.0,
            "Request failed"
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}
