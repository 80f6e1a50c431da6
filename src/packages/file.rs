// src/packages/file.rs

//! Package files found on disk

use std::path::PathBuf;
use std::time::SystemTime;

/// One package archive on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    pub path: PathBuf,
    pub modified_at: SystemTime,
}

impl PackageFile {
    pub fn new(path: impl Into<PathBuf>, modified_at: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified_at,
        }
    }

    /// File name without the directory, for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Package files produced by one scan, in directory-iteration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    files: Vec<PackageFile>,
}

impl CandidateSet {
    pub fn new(files: Vec<PackageFile>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageFile> {
        self.files.iter()
    }

    pub fn files(&self) -> &[PackageFile] {
        &self.files
    }

    /// Keep only the files whose name satisfies `keep`
    pub fn retain_file_names(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.files.retain(|file| keep(&file.file_name()));
    }

    /// Sort by path, for callers that need a stable order
    pub fn sort_by_path(&mut self) {
        self.files.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub fn into_files(self) -> Vec<PackageFile> {
        self.files
    }
}

impl From<Vec<PackageFile>> for CandidateSet {
    fn from(files: Vec<PackageFile>) -> Self {
        Self::new(files)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a PackageFile;
    type IntoIter = std::slice::Iter<'a, PackageFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
