//! Core data model for the versioning engine

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hash;

/// Format of the timestamp captured on every commit (local time, second
/// resolution).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded state of a single file.
///
/// Immutable once created: `hash` is derived from the other four fields at
/// construction and is never set externally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    /// Hex-encoded SHA-256 over `(filename, content, timestamp, message)`
    pub hash: String,

    /// Local date/time the commit was created, `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,

    /// User-supplied description; may be empty
    pub message: String,

    /// Logical path the commit applies to; partition key for reverts
    pub filename: String,

    /// Full snapshot of the file's content at commit time
    pub content: String,
}

impl Commit {
    /// Creates a commit stamped with the current local time.
    pub fn new(filename: String, message: String, content: String) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(filename, message, content, timestamp)
    }

    /// Creates a commit with an explicit timestamp. The hash is computed
    /// here; callers never supply one.
    pub fn with_timestamp(
        filename: String,
        message: String,
        content: String,
        timestamp: String,
    ) -> Self {
        let hash = hash::digest(&filename, &content, &timestamp, &message);
        Self {
            hash,
            timestamp,
            message,
            filename,
            content,
        }
    }

    /// First eight hash characters, for one-line displays.
    pub fn short_hash(&self) -> &str {
        &self.hash[..8]
    }

    /// Recomputes the digest from the identity fields and compares it to the
    /// stored hash. True for every commit built through the constructors.
    pub fn verify(&self) -> bool {
        hash::digest(&self.filename, &self.content, &self.timestamp, &self.message) == self.hash
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.short_hash(),
            self.timestamp,
            self.filename,
            self.message
        )
    }
}
