// src/repository/resolver.rs

//! Selecting the canonical file for a package
//!
//! The newest file by modification time represents the package in the
//! database; every other file for the same name is superseded. When two files
//! share the newest modification time, the lexicographically greatest path
//! wins, so the choice never depends on directory-iteration order.

use super::scanner::{ScanFilter, scan};
use crate::error::{Error, Result};
use crate::packages::{CandidateSet, PackageFile, PackageGrammar};
use std::path::Path;
use tracing::debug;

/// Outcome of resolving one package name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// File to register in the database
    pub canonical: PackageFile,
    /// Older files for the same package, candidates for deletion
    pub superseded: Vec<PackageFile>,
}

impl Resolution {
    /// Number of files found for the package
    pub fn count(&self) -> usize {
        self.superseded.len() + 1
    }
}

/// Find the files of `package_name` in `dir` and pick the canonical one
///
/// Read-only: deleting the superseded files is up to the caller.
pub fn resolve(package_name: &str, dir: &Path) -> Result<Resolution> {
    let filter = ScanFilter::Matching(PackageGrammar::for_name(package_name)?);
    let candidates = scan(dir, &filter)?;

    debug!("Found {} candidate files for {}", candidates.len(), package_name);
    select_canonical(candidates).ok_or_else(|| Error::NoPackageFiles(package_name.to_string()))
}

/// Split a candidate set into its canonical file and the superseded rest
///
/// Returns `None` for an empty set.
pub fn select_canonical(candidates: CandidateSet) -> Option<Resolution> {
    let mut files = candidates.into_files();

    let newest = files
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.modified_at
                .cmp(&b.modified_at)
                .then_with(|| a.path.cmp(&b.path))
        })
        .map(|(index, _)| index)?;

    let canonical = files.remove(newest);
    Some(Resolution {
        canonical,
        superseded: files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn file(name: &str, secs: u64) -> PackageFile {
        PackageFile::new(format!("/repo/{}", name), at(secs))
    }

    /// All orderings of `items`
    fn permutations(items: &[PackageFile]) -> Vec<Vec<PackageFile>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut result = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let first = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, first.clone());
                result.push(tail);
            }
        }
        result
    }

    #[test]
    fn test_empty_set_has_no_canonical() {
        assert!(select_canonical(CandidateSet::default()).is_none());
    }

    #[test]
    fn test_single_file_is_canonical() {
        let only = file("foo-1.0-1-any.pkg.tar.xz", 5);
        let resolution = select_canonical(vec![only.clone()].into()).unwrap();

        assert_eq!(resolution.canonical, only);
        assert!(resolution.superseded.is_empty());
        assert_eq!(resolution.count(), 1);
    }

    #[test]
    fn test_newest_wins_in_every_order() {
        let files = vec![
            file("foo-1.0-1-any.pkg.tar.xz", 10),
            file("foo-1.1-1-any.pkg.tar.xz", 30),
            file("foo-0.9-1-any.pkg.tar.xz", 20),
            file("foo-0.8-1-any.pkg.tar.xz", 5),
        ];

        for order in permutations(&files) {
            let resolution = select_canonical(order.into()).unwrap();
            assert_eq!(resolution.canonical, files[1]);
            assert_eq!(resolution.superseded.len(), 3);
            assert!(!resolution.superseded.contains(&files[1]));
        }
    }

    #[test]
    fn test_equal_times_break_ties_by_path() {
        let a = file("foo-1.0-1-any.pkg.tar.xz", 10);
        let b = file("foo-1.1-1-any.pkg.tar.xz", 10);

        for order in permutations(&[a.clone(), b.clone()]) {
            let resolution = select_canonical(order.into()).unwrap();
            assert_eq!(resolution.canonical, b);
            assert_eq!(resolution.superseded, vec![a.clone()]);
        }
    }

    #[test]
    fn test_resolve_without_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("bar-1.0-1-any.pkg.tar.xz"), b"").unwrap();

        let result = resolve("foo", tmp.path());
        assert!(matches!(result, Err(Error::NoPackageFiles(name)) if name == "foo"));
    }

    #[test]
    fn test_resolve_picks_newest_on_disk() {
        use filetime::{FileTime, set_file_mtime};

        let tmp = tempfile::tempdir().unwrap();
        let old = tmp.path().join("foo-1.0-1-x86_64.pkg.tar.xz");
        let new = tmp.path().join("foo-1.1-1-x86_64.pkg.tar.xz");
        let other = tmp.path().join("foo-bar-2.0-1-x86_64.pkg.tar.xz");
        for (path, secs) in [(&old, 100), (&new, 200), (&other, 300)] {
            std::fs::write(path, b"").unwrap();
            set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
        }

        let resolution = resolve("foo", tmp.path()).unwrap();
        assert_eq!(resolution.canonical.path, new);
        assert_eq!(resolution.superseded.len(), 1);
        assert_eq!(resolution.superseded[0].path, old);
    }
}
