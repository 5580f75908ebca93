//! The check pipeline: extract, validate, provision, build, test.
//!
//! Control flows strictly forward. A content failure halts before
//! provisioning; a build failure halts before any test run. Build and test
//! each complete every sub-project before aggregating so the submitter sees
//! all findings in one pass.

use crate::build::compile_all;
use crate::config::AssignmentConfig;
use crate::error::{CheckError, Result};
use crate::extract::extract_archive;
use crate::process::ProcessRunner;
use crate::provision::copy_provided_files;
use crate::run::run_all;
use crate::validate::check_folder;
use std::path::Path;
use tempfile::TempDir;

/// Submission-facing verdict of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed,
}

/// Run the whole pipeline against one submission archive.
///
/// The working directory lives for exactly this call: `TempDir` removes it on
/// drop whether the pipeline passes, fails a check, or errors out, so no
/// temporary state leaks across invocations.
pub fn run_check<R: ProcessRunner>(
    archive: &Path,
    provided_dir: &Path,
    config: &AssignmentConfig,
    runner: &R,
) -> Result<CheckOutcome> {
    let work_dir = TempDir::new().map_err(|e| {
        CheckError::UserError(format!("cannot create temporary directory: {}", e))
    })?;
    let work = work_dir.path();

    println!("Extracting zip to temporary folder: {}", work.display());
    extract_archive(archive, work)?;

    let report = check_folder(work, config)?;
    if report.has_errors() {
        return Ok(CheckOutcome::Failed);
    }

    copy_provided_files(provided_dir, work, config)?;

    if !compile_all(runner, work, config)? {
        return Ok(CheckOutcome::Failed);
    }
    if !run_all(runner, work, config)? {
        return Ok(CheckOutcome::Failed);
    }

    Ok(CheckOutcome::Passed)
}
