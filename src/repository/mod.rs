// src/repository/mod.rs

//! Local repository management
//!
//! This module provides the repository operations:
//! - `add`: register the newest file of each package, deleting older files
//! - `remove`: delete package files and drop their database entries
//! - `update`: add every package whose files changed since the database did
//! - `list`: list the packages present in the repository directory
//!
//! Failures of single items (one file, one package, one command) are reported
//! and folded into the returned [`Status`]; only prerequisite failures are
//! returned as errors.

pub mod deletion;
pub mod prompt;
pub mod resolver;
pub mod scanner;
pub mod tools;
mod update;

pub use deletion::delete_with_confirmation;
pub use prompt::{Prompt, TerminalPrompt};
pub use resolver::{Resolution, resolve};
pub use scanner::{ScanFilter, scan};
pub use tools::{DatabaseTool, RepoTools};

use crate::config::Config;
use crate::db::RepositoryDatabase;
use crate::error::{Error, Result};
use crate::packages::PackageGrammar;
use crate::status::Status;
use std::collections::BTreeSet;
use tracing::{error, info, warn};

/// A local repository: a directory of package files plus its database
pub struct Repository<T: DatabaseTool, P: Prompt> {
    config: Config,
    database: RepositoryDatabase,
    grammar: PackageGrammar,
    tools: T,
    prompt: P,
    soft: bool,
}

impl<T: DatabaseTool, P: Prompt> Repository<T, P> {
    /// Create a repository from its configuration
    pub fn new(config: Config, tools: T, prompt: P) -> Result<Self> {
        Ok(Self {
            database: RepositoryDatabase::new(config.db_path()),
            grammar: PackageGrammar::new()?,
            config,
            tools,
            prompt,
            soft: false,
        })
    }

    /// In soft mode no files are deleted; only the database is touched
    pub fn with_soft(mut self, soft: bool) -> Self {
        self.soft = soft;
        self
    }

    pub fn database(&self) -> &RepositoryDatabase {
        &self.database
    }

    pub fn tools(&self) -> &T {
        &self.tools
    }

    /// Add packages by name
    ///
    /// Each name is processed independently; a failure on one name does not
    /// stop the others.
    pub fn add(&mut self, names: &[String]) -> Result<Status> {
        self.database.check()?;

        let mut status = Status::OK;
        for name in names {
            status |= self.add_package(name);
        }
        Ok(status)
    }

    /// Remove packages by name
    ///
    /// Unless soft, the files of all names are gathered and deleted behind a
    /// single confirmation. The database entries are removed even when no files
    /// exist.
    pub fn remove(&mut self, names: &[String]) -> Result<Status> {
        self.database.check()?;

        let mut status = Status::OK;

        if !self.soft {
            let filter = ScanFilter::Matching(PackageGrammar::for_names(names)?);
            let mut files = scan(&self.config.db_dir, &filter)?;

            if files.is_empty() {
                println!("No packages (files) found; nothing to remove.");
            } else {
                files.sort_by_path();
                let failures = delete_with_confirmation(files.files(), &mut self.prompt);
                if failures > 0 {
                    status |= Status::MINOR;
                }
            }
        }

        if let Err(e) = self.tools.remove(self.database.path(), names) {
            error!("{}", e);
            status |= Status::SYSTEM;
        }

        Ok(status)
    }

    /// Names of the packages in the repository directory, sorted and unique
    pub fn list(&self) -> Result<Vec<String>> {
        self.database.check()?;

        let filter = ScanFilter::Matching(self.grammar.file_name_regex().clone());
        let files = scan(&self.config.db_dir, &filter)?;

        let names: BTreeSet<String> = files
            .iter()
            .filter_map(|file| self.grammar.extract_name(&file.file_name()))
            .collect();

        Ok(names.into_iter().collect())
    }

    /// Compare the database against upstream; not implemented
    pub fn sync(&self) -> Result<Status> {
        self.database.check()?;

        warn!("sync has not been implemented yet");
        Ok(Status::UNDEF)
    }

    /// Resolve one package, delete its superseded files and add it
    fn add_package(&mut self, name: &str) -> Status {
        let resolution = match resolve(name, &self.config.db_dir) {
            Ok(resolution) => resolution,
            Err(Error::NoPackageFiles(_)) => {
                warn!("Did not find any files to add for: {}", name);
                return Status::DEFAULT;
            }
            Err(e) => {
                error!("Cannot look up files for {}: {}", name, e);
                return Status::MINOR;
            }
        };

        let mut status = Status::OK;
        println!("Found {} files for: {}", resolution.count(), name);

        if !resolution.superseded.is_empty() && !self.soft {
            println!("Keeping: {}", resolution.canonical.path.display());
            let failures = delete_with_confirmation(&resolution.superseded, &mut self.prompt);
            if failures > 0 {
                info!("{} files for {} could not be deleted", failures, name);
                status |= Status::MINOR;
            }
        }

        if let Err(e) = self.tools.add(self.database.path(), &resolution.canonical.path) {
            error!("{}", e);
            status |= Status::SYSTEM;
        }

        status
    }
}
