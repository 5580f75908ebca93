//! Assignment profile configuration.
//!
//! A profile describes one course assignment: which files the student must
//! submit, which files the checker supplies, and how the sub-projects are
//! compiled and tested. The built-in default is the matamikya assignment;
//! operators can override it with a YAML file via `--config`. Unknown YAML
//! fields are silently ignored for forward compatibility.
//!
//! Profiles are immutable after load; the pipeline only ever reads them.

use crate::error::{CheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Subdirectory of the working directory that receives the provided test files.
pub const TESTS_DIR: &str = "tests";

/// A (subdirectory, glob pattern) pair identifying sub-project sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceGlob {
    /// Subdirectory relative to the working directory; empty means top level.
    #[serde(default)]
    pub subdir: String,

    /// Filename glob matched against the entries of that subdirectory.
    pub pattern: String,
}

impl SourceGlob {
    pub fn new(subdir: &str, pattern: &str) -> Self {
        Self {
            subdir: subdir.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// One independently compiled and tested part of the submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubProject {
    /// Display name used in progress and error lines.
    pub name: String,

    /// Name of the executable the compiler produces in the working directory.
    pub exec_name: String,

    /// Source globs expanded against the working directory, in order.
    pub sources: Vec<SourceGlob>,

    /// Trailing compiler args (library search paths and -l flags).
    #[serde(default)]
    pub extra_args: Vec<String>,
}

/// The immutable configuration value for one assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Files that must be present at the archive top level, exact case.
    pub required_files: Vec<String>,

    /// Files that must be present at the archive top level, any case.
    pub required_files_case_insensitive: Vec<String>,

    /// Provided files copied into the top level of the working directory.
    ///
    /// Students must not include these; the checker supplies them.
    pub provided_files: Vec<String>,

    /// Provided files copied into the tests subdirectory.
    pub provided_test_files: Vec<String>,

    /// Extra names forbidden in a submission without being copied anywhere.
    pub forbidden_misc_files: Vec<String>,

    /// Compiler command; may carry leading flags (e.g. "gcc" or "cc -m32").
    pub compiler: String,

    /// Baseline flags passed to every compile.
    pub base_compiler_args: Vec<String>,

    /// The sub-projects, compiled and then tested in order.
    pub parts: Vec<SubProject>,
}

impl Default for AssignmentConfig {
    /// The matamikya assignment profile.
    fn default() -> Self {
        Self {
            required_files: vec!["matamikya.c".to_string(), "amount_set_str.c".to_string()],
            required_files_case_insensitive: vec![
                "makefile".to_string(),
                "dry.pdf".to_string(),
            ],
            provided_files: vec![
                "amount_set_str.h".to_string(),
                "matamikya.h".to_string(),
                "matamikya_print.h".to_string(),
                "matamikya_print.c".to_string(),
                "list.h".to_string(),
                "set.h".to_string(),
                "amount_set.h".to_string(),
                "libmtm.a".to_string(),
                "libas.a".to_string(),
            ],
            provided_test_files: vec![
                "test_utilities.h".to_string(),
                "matamikya_tests.c".to_string(),
                "matamikya_tests.h".to_string(),
                "matamikya_main.c".to_string(),
                "expected_best_selling.txt".to_string(),
                "expected_no_selling.txt".to_string(),
                "expected_inventory.txt".to_string(),
                "expected_order.txt".to_string(),
            ],
            forbidden_misc_files: Vec::new(),
            compiler: "gcc".to_string(),
            base_compiler_args: vec![
                "-std=c99".to_string(),
                "-Wall".to_string(),
                "-Werror".to_string(),
                "-pedantic-errors".to_string(),
            ],
            parts: vec![
                SubProject {
                    name: "amount_set_str".to_string(),
                    exec_name: "amount_set_str".to_string(),
                    sources: vec![
                        SourceGlob::new("", "amount_set_str*.c"),
                        SourceGlob::new(TESTS_DIR, "amount_set_str*.c"),
                    ],
                    extra_args: Vec::new(),
                },
                SubProject {
                    name: "matamikya".to_string(),
                    exec_name: "matamikya".to_string(),
                    sources: vec![
                        SourceGlob::new("", "matamikya*.c"),
                        SourceGlob::new(TESTS_DIR, "matamikya*.c"),
                    ],
                    extra_args: vec![
                        "-L.".to_string(),
                        "-lm".to_string(),
                        "-lmtm".to_string(),
                        "-las".to_string(),
                    ],
                },
            ],
        }
    }
}

impl AssignmentConfig {
    /// Load a profile from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility; omitted fields fall back to the matamikya defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a profile from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AssignmentConfig = serde_yaml::from_str(yaml)
            .map_err(|e| CheckError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate profile values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `compiler` must parse to a non-empty command
    /// - at least one sub-project must be defined
    /// - sub-project names, executable names, and glob patterns must be non-empty
    /// - executable names must be bare filenames
    pub fn validate(&self) -> Result<()> {
        self.compiler_argv()?;

        if self.parts.is_empty() {
            return Err(CheckError::UserError(
                "config validation failed: at least one sub-project is required".to_string(),
            ));
        }

        for part in &self.parts {
            if part.name.is_empty() {
                return Err(CheckError::UserError(
                    "config validation failed: sub-project name must be non-empty".to_string(),
                ));
            }
            if part.exec_name.is_empty() || part.exec_name.contains('/') {
                return Err(CheckError::UserError(format!(
                    "config validation failed: exec_name for '{}' must be a bare filename",
                    part.name
                )));
            }
            if part.sources.is_empty() {
                return Err(CheckError::UserError(format!(
                    "config validation failed: sub-project '{}' has no source globs",
                    part.name
                )));
            }
            for source in &part.sources {
                if source.pattern.is_empty() {
                    return Err(CheckError::UserError(format!(
                        "config validation failed: sub-project '{}' has an empty source pattern",
                        part.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Parse the compiler command string into an argv array.
    ///
    /// Uses shell-words so the command runs deterministically without
    /// invoking a shell.
    pub fn compiler_argv(&self) -> Result<Vec<String>> {
        let argv = shell_words::split(&self.compiler).map_err(|e| {
            CheckError::UserError(format!(
                "failed to parse compiler command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.compiler, e
            ))
        })?;

        if argv.is_empty() {
            return Err(CheckError::UserError(
                "config validation failed: compiler command is empty".to_string(),
            ));
        }

        Ok(argv)
    }

    /// Every name the student must not include: all provided files plus any
    /// extra forbidden names.
    pub fn forbidden_files(&self) -> Vec<String> {
        let mut forbidden = self.provided_files.clone();
        forbidden.extend(self.provided_test_files.iter().cloned());
        forbidden.extend(self.forbidden_misc_files.iter().cloned());
        forbidden
    }
}
