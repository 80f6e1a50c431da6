// src/repository/scanner.rs

//! Directory scanning for package files
//!
//! Scans exactly one directory level and only regular files; directories and
//! symlinks are ignored. A file that cannot be stat'ed aborts the scan rather
//! than being skipped, since a skipped file would never be considered for
//! deletion.

use crate::error::{Error, Result};
use crate::packages::{CandidateSet, PackageFile};
use regex::Regex;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;
use walkdir::WalkDir;

/// Which files a scan keeps
#[derive(Debug, Clone)]
pub enum ScanFilter {
    /// File name matches the regex
    Matching(Regex),
    /// Modification time strictly after the instant
    ModifiedAfter(SystemTime),
}

impl ScanFilter {
    fn accepts(&self, file_name: &str, modified_at: SystemTime) -> bool {
        match self {
            ScanFilter::Matching(re) => re.is_match(file_name),
            ScanFilter::ModifiedAfter(threshold) => modified_at > *threshold,
        }
    }
}

/// Scan `dir` for regular files accepted by `filter`
///
/// Entries are returned in directory-iteration order, which is not sorted.
pub fn scan(dir: &Path, filter: &ScanFilter) -> Result<CandidateSet> {
    if !dir.is_dir() {
        return Err(Error::ScanError(format!(
            "cannot open directory {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            Error::ScanError(format!("cannot read directory {}: {}", dir.display(), e))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let stat_error = |e: &dyn std::fmt::Display| {
            Error::ScanError(format!("cannot stat {}: {}", entry.path().display(), e))
        };
        let metadata = entry.metadata().map_err(|e| stat_error(&e))?;
        let modified_at = metadata.modified().map_err(|e| stat_error(&e))?;

        let file_name = entry.file_name().to_string_lossy();
        if filter.accepts(&file_name, modified_at) {
            files.push(PackageFile::new(entry.path(), modified_at));
        }
    }

    debug!("Scanned {}: {} matching files", dir.display(), files.len());
    Ok(CandidateSet::new(files))
}
