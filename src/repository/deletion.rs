// src/repository/deletion.rs

//! Confirmation-gated deletion of package files

use super::prompt::Prompt;
use crate::packages::PackageFile;
use tracing::{error, info};

/// Indentation lining continuation lines up under the first file name
const QUESTION_INDENT: &str = "\n              ";

/// Build the confirmation question, showing file names only
pub fn deletion_question(files: &[PackageFile]) -> String {
    let names: Vec<String> = files.iter().map(PackageFile::file_name).collect();
    format!("Delete files: {}?", names.join(QUESTION_INDENT))
}

/// Ask once, then delete every file in `files` if confirmed
///
/// Deletion is best effort: a file that cannot be removed is reported and
/// counted, and the remaining files are still attempted. Returns the number of
/// files that could not be deleted; declining deletes nothing and returns 0.
pub fn delete_with_confirmation(files: &[PackageFile], prompt: &mut dyn Prompt) -> usize {
    if files.is_empty() {
        return 0;
    }

    if !prompt.confirm(&deletion_question(files)) {
        info!("Deletion of {} files declined", files.len());
        return 0;
    }

    let mut failures = 0;
    for file in files {
        println!("Removing file: {}", file.path.display());
        if let Err(e) = std::fs::remove_file(&file.path) {
            error!("Failed to remove {}: {}", file.path.display(), e);
            failures += 1;
        }
    }

    failures
}
