//! Overlay of instructor-provided files onto a validated submission.

use crate::config::{AssignmentConfig, TESTS_DIR};
use crate::error::{CheckError, Result};
use std::fs;
use std::path::Path;

/// Copy the provided files into the working directory.
///
/// Runs only after a clean content check, so no forbidden copy of these files
/// can already be present. A missing source file here is a deployment fault
/// of the checker installation, not a student error.
pub fn copy_provided_files(
    provided_dir: &Path,
    work_dir: &Path,
    config: &AssignmentConfig,
) -> Result<()> {
    let dst_tests = work_dir.join(TESTS_DIR);
    fs::create_dir_all(&dst_tests).map_err(|e| {
        CheckError::ProvisionError(format!("cannot create '{}': {}", dst_tests.display(), e))
    })?;

    for name in &config.provided_files {
        copy_one(&provided_dir.join(name), &work_dir.join(name))?;
    }

    let src_tests = provided_dir.join(TESTS_DIR);
    for name in &config.provided_test_files {
        copy_one(&src_tests.join(name), &dst_tests.join(name))?;
    }

    Ok(())
}

fn copy_one(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|e| {
        CheckError::ProvisionError(format!(
            "cannot copy '{}' to '{}': {}",
            src.display(),
            dst.display(),
            e
        ))
    })?;
    Ok(())
}
