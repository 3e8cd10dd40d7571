//! Filerev Store - append-only commit history over pluggable file access
//!
//! This crate owns the versioning logic: the [`CommitStore`] records full
//! file snapshots as [`Commit`](filerev_core::Commit) records and restores
//! them by `(filename, hash)` lookup. Raw file I/O is abstracted behind the
//! [`FileStore`] trait, with a disk-backed and an in-memory implementation.

mod error;
mod filestore;
mod store;

pub use error::StoreError;
pub use filestore::{DiskStore, FileStore, MemStore};
pub use store::{CommitStore, Revert};
