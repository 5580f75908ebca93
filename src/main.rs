//! Finalcheck: pre-submission checker for course assignment ZIP archives.
//!
//! This is the main entry point for the `finalcheck` CLI. It parses
//! arguments, loads the assignment profile, runs the check pipeline, and
//! prints the final verdict banner. A submission that fails its checks is a
//! normal outcome (exit 0 with a failure banner); only internal tool faults
//! such as an unreadable archive map to non-zero exit codes.

mod build;
mod cli;
mod config;
mod error;
mod exit_codes;
mod extract;
mod pipeline;
mod process;
mod provision;
mod run;
#[cfg(test)]
mod test_support;
mod validate;

use cli::Cli;
use config::AssignmentConfig;
use error::{CheckError, Result};
use pipeline::CheckOutcome;
use process::SystemRunner;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AssignmentConfig::load(path)?,
        None => AssignmentConfig::default(),
    };
    let provided_dir = resolve_provided_dir(cli.provided_dir)?;

    let outcome = pipeline::run_check(&cli.archive, &provided_dir, &config, &SystemRunner)?;

    match outcome {
        CheckOutcome::Passed => println!("Congratulations, you passed the provided tests!!!"),
        CheckOutcome::Failed => println!("Submission has errors, please fix."),
    }
    Ok(())
}

/// Resolve the directory holding the instructor-provided files.
///
/// Defaults to the directory containing the running executable, since the
/// provided files ship alongside the checker.
fn resolve_provided_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        if !dir.is_dir() {
            return Err(CheckError::UserError(format!(
                "provided-files directory '{}' does not exist or is not a directory.\n\
                 Fix: pass --provided-dir pointing at the directory that holds the provided files.",
                dir.display()
            )));
        }
        return Ok(dir);
    }

    let exe = std::env::current_exe()
        .map_err(|e| CheckError::UserError(format!("failed to locate executable: {}", e)))?;
    exe.parent().map(|dir| dir.to_path_buf()).ok_or_else(|| {
        CheckError::UserError(
            "failed to locate the provided-files directory; pass --provided-dir.".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_provided_dir_accepts_existing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_provided_dir(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn resolve_provided_dir_rejects_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-dir");
        let err = resolve_provided_dir(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn resolve_provided_dir_defaults_to_exe_directory() {
        let dir = resolve_provided_dir(None).unwrap();
        assert!(dir.is_dir());
    }
}
