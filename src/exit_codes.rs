//! Exit code constants for the finalcheck CLI.
//!
//! A checked submission exits 0 whether it passed or failed; the banner on
//! stdout carries the verdict. Non-zero codes are reserved for faults in the
//! tool's own inputs or installation:
//! - 0: Success (including "submission has errors" outcomes)
//! - 1: User error (bad args, bad config, bad provided-files directory)
//! - 2: Archive error (unreadable or corrupt ZIP)
//! - 3: Provisioning error (provided files missing on the tool's side)

/// Successful execution, including a failed submission check.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or missing provided-files directory.
pub const USER_ERROR: i32 = 1;

/// Archive error: the submission ZIP could not be read or extracted.
pub const ARCHIVE_FAILURE: i32 = 2;

/// Provisioning error: a provided file could not be copied into place.
pub const PROVISION_FAILURE: i32 = 3;
