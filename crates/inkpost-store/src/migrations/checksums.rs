//! Checksum validation for migrations
//!
//! A migration's SHA256 is recorded when it is applied and compared on every
//! later start, so an edited migration file is caught instead of silently skipped.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
