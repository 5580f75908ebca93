//! CLI argument parsing for finalcheck.
//!
//! Uses clap derive macros for declarative argument definitions. The tool
//! takes a single positional archive path; everything else has defaults.

use clap::Parser;
use std::path::PathBuf;

/// Finalcheck: verify a submission ZIP before handing it in.
///
/// Checks that the archive contains all required files and none of the
/// instructor-provided ones, overlays the provided files, compiles both
/// assignment parts with the course compiler flags, and runs the provided
/// tests.
#[derive(Parser, Debug)]
#[command(name = "finalcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the submission ZIP file to check.
    pub archive: PathBuf,

    /// Directory holding the instructor-provided files.
    ///
    /// Must contain the provided top-level files plus a tests/ subdirectory
    /// with the provided test files. Defaults to the directory containing
    /// this executable.
    #[arg(long)]
    pub provided_dir: Option<PathBuf>,

    /// YAML assignment profile overriding the built-in one.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
