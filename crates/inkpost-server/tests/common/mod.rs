//! In-process harness for the HTTP tests
//!
//! Drives the router with `oneshot` against a migrated temp-dir database
//! and keeps the flash cookie between requests the way a browser would.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::Router;
use inkpost_server::flash::{FlashKey, FLASH_COOKIE};
use inkpost_server::routes::router;
use inkpost_server::templates::Templates;
use inkpost_server::AppState;
use inkpost_store::db::create_pool;
use inkpost_store::migrations::apply_migrations;
use inkpost_store::{DbPool, SqliteRepo};
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn assert_redirect_to(&self, to: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(to));
    }
}

pub struct TestApp {
    _dir: TempDir,
    router: Router,
    pub pool: DbPool,
    flash_cookie: Option<String>,
}

impl TestApp {
    pub fn spawn() -> Self {
        let dir = TempDir::new().unwrap();
        let pool = create_pool(dir.path().join("blog.db"), 2).unwrap();
        apply_migrations(&mut pool.get().unwrap()).unwrap();

        let state = AppState::new(
            pool.clone(),
            Templates::new().unwrap(),
            FlashKey::new(TEST_SECRET),
        );

        Self {
            _dir: dir,
            router: router(state),
            pool,
            flash_cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .unwrap();
        self.send(request).await
    }

    /// Follow a redirect response with a GET
    pub async fn follow(&mut self, response: &TestResponse) -> TestResponse {
        let to = response.location.clone().expect("response is not a redirect");
        self.get(&to).await
    }

    /// Create a post through the form and return its id
    pub async fn create_post(&mut self, title: &str, content: &str) -> i64 {
        let response = self
            .post_form("/post/create", &[("title", title), ("content", content)])
            .await;
        response.assert_redirect_to("/");
        let conn = self.pool.get().unwrap();
        SqliteRepo::list_posts(&conn).unwrap().last().unwrap().id
    }

    pub fn post_count(&self) -> usize {
        let conn = self.pool.get().unwrap();
        SqliteRepo::list_posts(&conn).unwrap().len()
    }

    pub fn comment_count(&self, post_id: i64) -> usize {
        let conn = self.pool.get().unwrap();
        SqliteRepo::count_comments(&conn, post_id).unwrap()
    }

    pub fn set_flash_cookie(&mut self, value: &str) {
        self.flash_cookie = Some(value.to_string());
    }

    pub fn flash_cookie(&self) -> Option<&str> {
        self.flash_cookie.as_deref()
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.flash_cookie {
            Some(value) => builder.header(COOKIE, format!("{}={}", FLASH_COOKIE, value)),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        for header in response.headers().get_all(SET_COOKIE) {
            let header = header.to_str().unwrap();
            let Some(rest) = header.strip_prefix(&format!("{}=", FLASH_COOKIE)) else {
                continue;
            };
            let value = rest.split(';').next().unwrap_or_default();
            if value.is_empty() || header.contains("Max-Age=0") {
                self.flash_cookie = None;
            } else {
                self.flash_cookie = Some(value.to_string());
            }
        }

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(raw: &str) -> String {
    let mut out = String::new();
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
