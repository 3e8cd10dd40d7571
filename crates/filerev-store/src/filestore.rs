//! File content access for the commit store

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Capability the commit store uses to read and write tracked files.
///
/// `read` distinguishes a file that does not exist (`Ok(None)`, the normal
/// first-commit case) from one that exists but cannot be read (`Err`); the
/// two are never conflated.
pub trait FileStore {
    /// Returns the full content of `path`, or `None` if the file is absent.
    fn read(&self, path: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites `path` with `content` in full, creating it if absent.
    fn write(&self, path: &str, content: &str) -> Result<(), StoreError>;
}

/// [`FileStore`] backed by the real filesystem.
///
/// Tracked paths are resolved relative to a root directory, so independent
/// stores over different roots never collide.
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileStore for DiskStore {
    fn read(&self, path: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.resolve(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                path: path.to_string(),
                source: e,
            }),
        }
    }

    fn write(&self, path: &str, content: &str) -> Result<(), StoreError> {
        fs::write(self.resolve(path), content).map_err(|e| StoreError::Write {
            path: path.to_string(),
            source: e,
        })
    }
}

/// In-memory [`FileStore`] for tests and embedding.
#[derive(Debug, Default)]
pub struct MemStore {
    // RefCell because the trait writes through &self; single-threaded use only.
    files: RefCell<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileStore for MemStore {
    fn read(&self, path: &str) -> Result<Option<String>, StoreError> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write(&self, path: &str, content: &str) -> Result<(), StoreError> {
        self.files
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}
