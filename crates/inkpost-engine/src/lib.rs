//! Inkpost Engine - Orchestration layer
//!
//! Provides the blog operations: each one validates its input with the core
//! rules and then reads or writes through the store, committing every write
//! in a single transaction.

pub mod commands;

pub use commands::comment_commands::add_comment;
pub use commands::engine_query::{get_post, list_posts, view_post};
pub use commands::post_commands::{create_post, delete_post, update_post};
