//! Inkpost Core - domain model and shared facilities
//!
//! This crate provides the foundational pieces the rest of Inkpost builds on:
//! - Post and Comment models
//! - Validation rules for submitted forms
//! - The canonical error facility (`ExError`) and the domain error taxonomy
//! - The structured logging facility and its `log_op_*` macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{BlogError, ExError, ExErrorKind, Result};
pub use model::{Comment, CommentDraft, Post, PostDetail, PostDraft, PostId};
