//! Filerev Core - Commit data model and content fingerprinting
//!
//! This crate defines the `Commit` record and the deterministic SHA-256
//! digest that addresses it. The commit history itself lives in
//! `filerev-store`.

pub mod hash;
mod models;

pub use models::{Commit, TIMESTAMP_FORMAT};
