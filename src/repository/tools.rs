// src/repository/tools.rs

//! External database tools (`repo-add`, `repo-remove`)

use crate::config::Config;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Mutates the repository database
pub trait DatabaseTool {
    /// Register a package file in the database
    fn add(&mut self, db_path: &Path, file: &Path) -> Result<()>;

    /// Drop packages from the database by name
    fn remove(&mut self, db_path: &Path, names: &[String]) -> Result<()>;
}

/// Runs the pacman `repo-add` and `repo-remove` programs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTools {
    add_program: PathBuf,
    remove_program: PathBuf,
}

impl RepoTools {
    pub fn new(add_program: impl Into<PathBuf>, remove_program: impl Into<PathBuf>) -> Self {
        Self {
            add_program: add_program.into(),
            remove_program: remove_program.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.repo_add.clone(), config.repo_remove.clone())
    }

    /// Run `<program> <db_path> <args...>`; only the exit status is checked
    fn run<I, S>(program: &Path, db_path: &Path, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(program);
        command.arg(db_path).args(args);

        let command_line = std::iter::once(command.get_program())
            .chain(command.get_args())
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        println!("Running: {}", command_line);

        let status = command
            .status()
            .map_err(|e| Error::CommandFailed(format!("{}: {}", command_line, e)))?;
        debug!("{} exited with {}", program.display(), status);

        if !status.success() {
            return Err(Error::CommandFailed(format!("{}: {}", command_line, status)));
        }
        Ok(())
    }
}

impl DatabaseTool for RepoTools {
    fn add(&mut self, db_path: &Path, file: &Path) -> Result<()> {
        Self::run(&self.add_program, db_path, [file])
    }

    fn remove(&mut self, db_path: &Path, names: &[String]) -> Result<()> {
        Self::run(&self.remove_program, db_path, names)
    }
}
