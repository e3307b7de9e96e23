//! Database connection management
//!
//! Provides utilities for opening SQLite connections and pooling them for
//! the HTTP server.

use crate::errors::{from_pool, from_rusqlite, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

/// Shared pool of configured SQLite connections
pub type DbPool = r2d2::Pool<SqliteConnectionManager>;

/// A connection checked out of [`DbPool`]
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Pragmas applied to every connection
///
/// `foreign_keys` is per-connection in SQLite and off by default; the
/// comment -> post cascade depends on it.
const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 5000;";

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection with the settings the blog relies on
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(CONNECTION_PRAGMAS)
        .map_err(from_rusqlite)
}

/// Build a connection pool over the database file at `path`
///
/// Every connection handed out by the pool has had [`configure`] applied.
pub fn create_pool<P: AsRef<Path>>(path: P, max_size: u32) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(path.as_ref())
        .with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));

    let pool = r2d2::Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
        .map_err(from_pool)?;

    tracing::debug!(
        path = %path.as_ref().display(),
        max_size = pool.max_size(),
        "Created SQLite connection pool"
    );

    Ok(pool)
}
