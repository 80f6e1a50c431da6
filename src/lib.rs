// src/lib.rs

//! repo: local pacman repository management
//!
//! Keeps a directory of package files and its `repo-add` database in step:
//! for every package only the newest file is kept and registered, and older
//! files are deleted after confirmation.
//!
//! # Architecture
//!
//! - Filenames only: package names come from the filename grammar, archives are never opened
//! - Newest wins: the file with the latest modification time is canonical
//! - Database timestamp as high-water mark: `update` re-adds whatever changed since
//! - External tools: the database is only ever modified by `repo-add`/`repo-remove`

pub mod config;
pub mod db;
mod error;
pub mod packages;
pub mod repository;
pub mod status;

pub use config::Config;
pub use error::{Error, Result};
pub use repository::Repository;
pub use status::Status;
