//! Migration framework
//!
//! Provides:
//! - Migration runner with a checksummed `schema_version` ledger
//! - Idempotent application
//! - Embedded SQL migrations

mod checksums;
mod embedded;
mod runner;

pub use runner::{apply_migrations, applied_migrations};
