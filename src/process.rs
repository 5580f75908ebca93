//! External process invocation.
//!
//! The pipeline shells out twice per sub-project: once to the C compiler and
//! once to the compiled test binary. Both go through the `ProcessRunner`
//! trait so pipeline logic can be tested against a recording fake instead of
//! real processes.

use std::io;
use std::path::Path;
use std::process::Command;

/// Exit code and combined output of one finished process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code, or -1 if the process was killed by a signal.
    pub exit_code: i32,

    /// Stdout followed by stderr.
    pub output: String,
}

impl ProcessOutput {
    /// Whether the process exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Capability for running an external command to completion.
///
/// Every invocation is blocking and unbounded; a hanging process blocks the
/// whole pipeline.
pub trait ProcessRunner {
    /// Run `program` with `args` in `cwd`, waiting for it to exit.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ProcessOutput>;
}

/// Runs commands via `std::process::Command`.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ProcessOutput> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let combined = if stderr.is_empty() {
            stdout
        } else if stdout.is_empty() {
            stderr
        } else {
            format!("{}\n{}", stdout.trim_end_matches('\n'), stderr)
        };

        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn captures_exit_code_and_stdout() {
        let temp = TempDir::new().unwrap();
        let out = SystemRunner
            .run("sh", &sh("echo hello"), temp.path())
            .unwrap();
        assert!(out.success());
        assert!(out.output.contains("hello"));
    }

    #[test]
    fn merges_stderr_into_output() {
        let temp = TempDir::new().unwrap();
        let out = SystemRunner
            .run("sh", &sh("echo out; echo err 1>&2; exit 3"), temp.path())
            .unwrap();
        assert_eq!(out.exit_code, 3);
        assert!(!out.success());
        assert!(out.output.contains("out"));
        assert!(out.output.contains("err"));
    }

    #[test]
    fn runs_in_the_given_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "here").unwrap();
        let out = SystemRunner
            .run("sh", &sh("cat marker.txt"), temp.path())
            .unwrap();
        assert!(out.output.contains("here"));
    }

    #[test]
    fn missing_program_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let result = SystemRunner.run("definitely-not-a-command-9f3a", &[], temp.path());
        assert!(result.is_err());
    }
}
