//! Repository layer for persisting posts and comments to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
