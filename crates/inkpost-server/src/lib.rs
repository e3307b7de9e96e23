//! Inkpost Server - HTTP surface of the blog
//!
//! Provides:
//! - Layered configuration (defaults, TOML file, `INKPOST__*` environment)
//! - Signed flash-message cookies
//! - Embedded minijinja page templates
//! - The axum router and the six blog handlers

pub mod configuration;
pub mod error;
pub mod flash;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use configuration::Settings;
pub use server::Server;
pub use state::AppState;
