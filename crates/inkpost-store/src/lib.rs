//! Inkpost Store - Persistence layer on SQLite
//!
//! Provides:
//! - Connection opening, per-connection pragmas and an r2d2 pool
//! - Embedded SQL migrations with a checksummed ledger
//! - `SqliteRepo`, the prepared statements behind every blog operation

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::{DbPool, PooledConnection};
pub use errors::Result;
pub use repo::SqliteRepo;
