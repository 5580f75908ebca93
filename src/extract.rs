//! Submission archive extraction.

use crate::error::{CheckError, Result};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Extract the submission ZIP into `dest`.
///
/// The archive comes from a supervised grading context, so no size limits are
/// enforced. An unreadable or corrupt archive is fatal; no partially
/// extracted state is trusted.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| {
        CheckError::ArchiveError(format!("cannot open '{}': {}", archive.display(), e))
    })?;

    let mut zip = ZipArchive::new(file).map_err(|e| {
        CheckError::ArchiveError(format!("cannot read '{}': {}", archive.display(), e))
    })?;

    zip.extract(dest).map_err(|e| {
        CheckError::ArchiveError(format!("cannot extract '{}': {}", archive.display(), e))
    })?;

    Ok(())
}
