// src/config.rs

//! Configuration for repo
//!
//! The configuration file is a plain `key = value` file, by default at
//! `~/.repo.conf`:
//!
//! ```text
//! # where the packages and the database live
//! db_dir  = /srv/repo/
//! db_name = custom.db.tar.gz
//! ```

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Help text appended to configuration errors
const CONFIG_HELP: &str = "repo requires a configuration file with at least the following lines:
    db_name = name_of_database.db.tar.gz
    db_dir  = /path/to/database/";

/// Runtime configuration passed into the repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the package files and the database
    pub db_dir: PathBuf,
    /// File name of the database inside `db_dir`
    pub db_name: String,
    /// Program used to add entries to the database
    pub repo_add: PathBuf,
    /// Program used to remove entries from the database
    pub repo_remove: PathBuf,
}

impl Config {
    /// Default location of the configuration file
    pub const DEFAULT_PATH: &'static str = "~/.repo.conf";

    /// Program that adds package files to the database
    pub const REPO_ADD: &'static str = "/usr/bin/repo-add";

    /// Program that removes package entries from the database
    pub const REPO_REMOVE: &'static str = "/usr/bin/repo-remove";

    /// Create a configuration with the default external programs
    pub fn new(db_dir: impl Into<PathBuf>, db_name: impl Into<String>) -> Self {
        Self {
            db_dir: db_dir.into(),
            db_name: db_name.into(),
            repo_add: PathBuf::from(Self::REPO_ADD),
            repo_remove: PathBuf::from(Self::REPO_REMOVE),
        }
    }

    /// Full path of the database file
    pub fn db_path(&self) -> PathBuf {
        self.db_dir.join(&self.db_name)
    }

    /// Path of the default configuration file, with `~` expanded
    pub fn default_path() -> PathBuf {
        expand_tilde(Self::DEFAULT_PATH)
    }

    /// Load the configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!(
                "could not open configuration file '{}': {}\n{}",
                path.display(),
                e,
                CONFIG_HELP
            ))
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parse configuration file content
    ///
    /// Invalid lines and unknown keys are skipped with a warning; only missing
    /// required keys are an error.
    pub fn parse(content: &str, source: &str) -> Result<Self> {
        let mut db_dir = None;
        let mut db_name = None;

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                warn!("Invalid line in configuration file '{}': '{}'", source, line);
                continue;
            };

            let value = value.trim();
            match key.trim() {
                "db_dir" if !value.is_empty() => db_dir = Some(value.to_string()),
                "db_name" if !value.is_empty() => db_name = Some(value.to_string()),
                "db_dir" | "db_name" => {}
                other => warn!("Invalid key in configuration file '{}': '{}'", source, other),
            }
        }

        let missing: Vec<&str> = [("db_dir", &db_dir), ("db_name", &db_name)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key)
            .collect();

        match (db_dir, db_name) {
            (Some(dir), Some(name)) => Ok(Self::new(expand_tilde(&dir), name)),
            _ => Err(Error::ConfigError(format!(
                "required value for key '{}' missing from configuration file '{}'\n{}",
                missing.join("', '"),
                source,
                CONFIG_HELP
            ))),
        }
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let content = r#"
# Sample configuration
db_dir  = /srv/repo/
db_name = custom.db.tar.gz
"#;

        let config = Config::parse(content, "test").unwrap();
        assert_eq!(config.db_dir, PathBuf::from("/srv/repo/"));
        assert_eq!(config.db_name, "custom.db.tar.gz");
        assert_eq!(config.repo_add, PathBuf::from(Config::REPO_ADD));
        assert_eq!(config.repo_remove, PathBuf::from(Config::REPO_REMOVE));
    }

    #[test]
    fn test_db_path_without_doubled_separator() {
        let with_slash = Config::new("/srv/repo/", "custom.db.tar.gz");
        let without_slash = Config::new("/srv/repo", "custom.db.tar.gz");

        assert_eq!(with_slash.db_path(), PathBuf::from("/srv/repo/custom.db.tar.gz"));
        assert_eq!(with_slash.db_path(), without_slash.db_path());
    }

    #[test]
    fn test_invalid_lines_and_keys_are_skipped() {
        let content = "this line has no separator\ncolour = blue\ndb_dir=/srv/repo\ndb_name=x.db.tar.gz\n";

        let config = Config::parse(content, "test").unwrap();
        assert_eq!(config.db_name, "x.db.tar.gz");
    }

    #[test]
    fn test_missing_key_is_error() {
        let result = Config::parse("db_dir = /srv/repo\n", "test");
        match result {
            Err(Error::ConfigError(msg)) => assert!(msg.contains("db_name")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let result = Config::parse("db_dir =\ndb_name = x.db.tar.gz\n", "test");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load(Path::new("/nonexistent/path/repo.conf"));
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/etc/repo.conf"), PathBuf::from("/etc/repo.conf"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/.repo.conf"), home.join(".repo.conf"));
        }
    }
}
