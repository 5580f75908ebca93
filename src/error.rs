//! Error types for the finalcheck CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Student-facing findings (missing files, compile failures, test
//! failures) are not errors: they flow through return values and printed
//! report lines. These variants cover internal tool faults only.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for finalcheck operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum CheckError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The submission archive could not be read or extracted.
    #[error("archive error: {0}")]
    ArchiveError(String),

    /// A provided file could not be copied into the working directory.
    ///
    /// This is a deployment fault of the checker installation, not a
    /// student-facing failure.
    #[error("provisioning error: {0}")]
    ProvisionError(String),
}

impl CheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::UserError(_) => exit_codes::USER_ERROR,
            CheckError::ArchiveError(_) => exit_codes::ARCHIVE_FAILURE,
            CheckError::ProvisionError(_) => exit_codes::PROVISION_FAILURE,
        }
    }
}

/// Result type alias for finalcheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
