//! Error types for the store layer

use std::io;

/// I/O failures crossing the [`FileStore`](crate::FileStore) boundary.
///
/// A missing file is not an error (reads report it as `Ok(None)`); these
/// variants cover files that exist but cannot be accessed, and failed
/// writes. A revert miss is not an error either, it is reported as
/// [`Revert::NotFound`](crate::Revert::NotFound).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
