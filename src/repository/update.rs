// src/repository/update.rs

//! The `update` reconciliation pass
//!
//! The database's modification time is the high-water mark: every package
//! file newer than the database is re-resolved and added. Running `update`
//! twice without touching the directory finds nothing the second time,
//! because `repo-add` leaves the database newer than every file it added.

use super::scanner::{ScanFilter, scan};
use super::{DatabaseTool, Prompt, Repository};
use crate::error::Result;
use crate::packages::CandidateSet;
use crate::status::Status;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::time::SystemTime;
use tracing::debug;

impl<T: DatabaseTool, P: Prompt> Repository<T, P> {
    /// Add every package with files changed since the database was written
    ///
    /// Per-package failures never stop the pass; they are folded into the
    /// returned status.
    pub fn update(&mut self) -> Result<Status> {
        self.database.check()?;

        let db_time = self.database.modified_at()?;
        println!(
            "Database last modified: {}",
            DateTime::<Local>::from(db_time).format("%Y-%m-%d %H:%M:%S")
        );

        let changed = self.changed_since(db_time)?;
        if changed.is_empty() {
            println!("Database up-to-date: nothing to do.");
            return Ok(Status::OK);
        }

        println!("Found {} packages younger than database:", changed.len());
        for file in &changed {
            println!("    {}", file.file_name());
        }
        println!();

        let mut seen = HashSet::new();
        let mut status = Status::OK;

        for file in &changed {
            let Some(name) = self.grammar.extract_name(&file.file_name()) else {
                continue;
            };

            // One resolution per name; it re-scans and finds the newest file anyway
            if !seen.insert(name.clone()) {
                debug!("Already processed {}, skipping {}", name, file.file_name());
                continue;
            }

            status |= self.add_package(&name);
        }

        Ok(status)
    }

    /// Package files in the repository directory modified after `since`
    ///
    /// Sorted by path, so the first file of each package is stable.
    pub fn changed_since(&self, since: SystemTime) -> Result<CandidateSet> {
        let mut changed = scan(&self.config.db_dir, &ScanFilter::ModifiedAfter(since))?;
        changed.retain_file_names(|name| self.grammar.is_package_file(name));
        changed.sort_by_path();
        Ok(changed)
    }
}
