// src/db/mod.rs

//! Repository database file
//!
//! The database itself is maintained by `repo-add` and `repo-remove`; repo
//! only checks that it can be read and uses its modification time as the
//! high-water mark for `update`.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Handle on the database file of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDatabase {
    path: PathBuf,
}

impl RepositoryDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the database file can be opened for reading
    pub fn is_readable(&self) -> bool {
        File::open(&self.path).is_ok()
    }

    /// Fail unless the database file is readable
    pub fn check(&self) -> Result<()> {
        if !self.is_readable() {
            return Err(Error::DatabaseNotFound(self.path.display().to_string()));
        }
        Ok(())
    }

    /// Last modification time of the database file
    pub fn modified_at(&self) -> Result<SystemTime> {
        let modified = std::fs::metadata(&self.path)?.modified()?;
        debug!("Database {} last modified at {:?}", self.path.display(), modified);
        Ok(modified)
    }
}
