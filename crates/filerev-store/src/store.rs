//! Append-only commit history with revert-by-hash lookup

use filerev_core::Commit;

use crate::error::StoreError;
use crate::filestore::FileStore;

/// Outcome of a revert lookup.
///
/// A miss is a normal negative result, not a fault: the hash may be wrong,
/// or recorded under a different filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revert {
    /// The file was rewritten to this commit's content.
    Restored(Commit),

    /// No commit matched the `(filename, hash)` pair; nothing was written.
    NotFound,
}

/// Append-only, in-memory commit history over a [`FileStore`].
///
/// A freshly constructed store is active and empty; there is no separate
/// uninitialized state to guard against. Each store exclusively owns its
/// history, and the `&mut self` receivers on the mutating operations keep
/// access sequential. Multiple independent stores can coexist freely.
///
/// History is never persisted: it lives and dies with the store instance.
pub struct CommitStore<F: FileStore> {
    files: F,
    history: Vec<Commit>,
}

impl<F: FileStore> CommitStore<F> {
    /// Creates a store with an empty history.
    pub fn new(files: F) -> Self {
        Self {
            files,
            history: Vec::new(),
        }
    }

    /// Clears the history. Idempotent; the store stays usable.
    pub fn initialize(&mut self) {
        self.history.clear();
        log::info!("repository initialized");
    }

    /// Snapshots the current content of `filename` as a new commit and
    /// appends it to the history.
    ///
    /// A missing file is committed as empty content; a file that exists but
    /// cannot be read fails with [`StoreError::Read`] and leaves the history
    /// unchanged. Committing unchanged content is permitted and appends a
    /// new entry like any other commit.
    pub fn commit(&mut self, filename: &str, message: &str) -> Result<Commit, StoreError> {
        let content = match self.files.read(filename)? {
            Some(content) => content,
            None => {
                log::debug!("'{}' does not exist, committing empty content", filename);
                String::new()
            }
        };

        let commit = Commit::new(filename.to_string(), message.to_string(), content);
        log::info!("recorded {} for '{}'", commit.short_hash(), filename);

        self.history.push(commit.clone());
        Ok(commit)
    }

    /// The full history, oldest first. Read-only: the history cannot be
    /// mutated through the returned slice.
    pub fn log(&self) -> &[Commit] {
        &self.history
    }

    /// The underlying file access, for callers that need to read or seed
    /// tracked files through the same paths the store uses.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Number of commits recorded so far.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Restores `filename` to the state recorded under `hash`.
    ///
    /// The history is scanned newest to oldest, so when a hash repeats the
    /// most recently committed state wins. On a match the stored content is
    /// written back in full; on a miss no write is performed.
    pub fn revert(&mut self, filename: &str, hash: &str) -> Result<Revert, StoreError> {
        let found = self
            .history
            .iter()
            .rev()
            .find(|c| c.filename == filename && c.hash == hash);

        match found {
            Some(commit) => {
                self.files.write(filename, &commit.content)?;
                log::info!("restored '{}' to {}", filename, commit.short_hash());
                Ok(Revert::Restored(commit.clone()))
            }
            None => {
                log::debug!("no commit {} recorded for '{}'", hash, filename);
                Ok(Revert::NotFound)
            }
        }
    }

    /// Commits whose stored hash no longer matches recomputation from their
    /// fields. Always empty unless something corrupted the records.
    pub fn verify(&self) -> Vec<&Commit> {
        self.history.iter().filter(|c| !c.verify()).collect()
    }
}
