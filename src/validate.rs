//! Top-level content validation of the extracted submission.
//!
//! The check is deliberately flat: only the archive's top-level listing is
//! inspected, never the contents of subdirectories. All findings are
//! collected and reported together so the submitter can fix everything in one
//! pass.

use crate::config::AssignmentConfig;
use crate::error::{CheckError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// One report line from the content check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A required file is present (exact or case-insensitive match).
    RequiredPresent(String),

    /// A `.c`/`.h` file not otherwise listed; accepted.
    SourceFile(String),

    /// A required file is absent.
    MissingRequired(String),

    /// The student supplied a file the checker provides itself.
    ForbiddenPresent(String),

    /// Anything else at the top level.
    Unexpected(String),
}

impl Finding {
    /// Whether this finding fails the submission.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Finding::MissingRequired(_) | Finding::ForbiddenPresent(_) | Finding::Unexpected(_)
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::RequiredPresent(name) => {
                write!(f, "Found required file/directory: {}", name)
            }
            Finding::SourceFile(name) => write!(f, "Found C file: {}", name),
            Finding::MissingRequired(name) => {
                write!(f, "ERROR: Missing required file/directory: {}", name)
            }
            Finding::ForbiddenPresent(name) => {
                write!(f, "ERROR: Found provided file/directory: {}", name)
            }
            Finding::Unexpected(name) => {
                write!(f, "ERROR: Found unexpected file/directory: {}", name)
            }
        }
    }
}

/// Aggregated result of one content check.
#[derive(Debug, Default)]
pub struct ContentReport {
    pub findings: Vec<Finding>,
}

impl ContentReport {
    /// Clean only if zero errors of any kind were reported.
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

/// List the top level of `dir` and check it against the assignment profile.
///
/// Prints every finding plus a summary line, matching the report format
/// submitters see in the course instructions.
pub fn check_folder(dir: &Path, config: &AssignmentConfig) -> Result<ContentReport> {
    println!("Verifying contents...");

    let entries = list_top_level(dir)?;
    let report = check_folder_contents(
        &entries,
        &config.required_files,
        &config.required_files_case_insensitive,
        &config.forbidden_files(),
    );

    for finding in &report.findings {
        println!("{}", finding);
    }
    if report.has_errors() {
        println!("There are errors in contents of the ZIP file.");
    } else {
        println!("The ZIP file contains all the necessary files.");
    }

    Ok(report)
}

/// Classify a top-level listing against the three reference lists.
///
/// Pure function over names; filesystem access happens in `check_folder`.
pub fn check_folder_contents(
    contents: &[String],
    required: &[String],
    required_ci: &[String],
    forbidden: &[String],
) -> ContentReport {
    let mut report = ContentReport::default();
    let lowered: Vec<String> = contents.iter().map(|name| name.to_lowercase()).collect();

    for name in required {
        if contents.iter().any(|entry| entry == name) {
            report.push(Finding::RequiredPresent(name.clone()));
        } else {
            report.push(Finding::MissingRequired(name.clone()));
        }
    }

    for name in required_ci {
        if lowered.iter().any(|entry| *entry == name.to_lowercase()) {
            report.push(Finding::RequiredPresent(name.clone()));
        } else {
            report.push(Finding::MissingRequired(name.clone()));
        }
    }

    for name in forbidden {
        if contents.iter().any(|entry| entry == name) {
            report.push(Finding::ForbiddenPresent(name.clone()));
        }
    }

    for name in contents {
        if required.contains(name)
            || forbidden.contains(name)
            || required_ci
                .iter()
                .any(|req| req.to_lowercase() == name.to_lowercase())
        {
            // already classified above
            continue;
        }

        if name.ends_with(".c") || name.ends_with(".h") {
            report.push(Finding::SourceFile(name.clone()));
        } else {
            report.push(Finding::Unexpected(name.clone()));
        }
    }

    report
}

fn list_top_level(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        CheckError::ArchiveError(format!(
            "cannot list extracted contents of '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CheckError::ArchiveError(format!("cannot read directory entry: {}", e))
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    // read_dir order is platform-dependent; sort for stable reports.
    names.sort();
    Ok(names)
}
