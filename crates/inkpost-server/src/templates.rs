//! Page templates, compiled into the binary
//!
//! Template names end in `.html`, so minijinja autoescapes every
//! interpolated value.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::AppError;

pub const HOME: &str = "blog/home.html";
pub const CREATE: &str = "blog/post.html";
pub const VIEW: &str = "blog/view.html";
pub const UPDATE: &str = "blog/update.html";

const SOURCES: [(&str, &str); 5] = [
    ("base.html", include_str!("../templates/base.html")),
    (HOME, include_str!("../templates/blog/home.html")),
    (CREATE, include_str!("../templates/blog/post.html")),
    (VIEW, include_str!("../templates/blog/view.html")),
    (UPDATE, include_str!("../templates/blog/update.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Parse every embedded template
    ///
    /// # Errors
    /// A template with a syntax error fails here rather than on first render.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        for (name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render `name` with `ctx` into an HTML body
    ///
    /// # Errors
    /// Unknown template names and render failures map to `Template` errors.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, AppError> {
        let body = self.env.get_template(name)?.render(ctx)?;
        Ok(Html(body))
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}
