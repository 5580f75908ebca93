//! Test doubles and fixture helpers shared across module tests.

use crate::config::{AssignmentConfig, TESTS_DIR};
use crate::process::{ProcessOutput, ProcessRunner};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One invocation recorded by the fake runner.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
    pub(crate) cwd: PathBuf,
}

/// `ProcessRunner` fake that replays queued outputs and records every call.
///
/// Responses are consumed in FIFO order; a call past the end of the queue
/// succeeds with exit 0 and empty output.
pub(crate) struct FakeRunner {
    responses: RefCell<VecDeque<ProcessOutput>>,
    pub(crate) calls: RefCell<Vec<RecordedCall>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn push_response(&self, exit_code: i32, output: &str) {
        self.responses.borrow_mut().push_back(ProcessOutput {
            exit_code,
            output: output.to_string(),
        });
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ProcessOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });

        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(ProcessOutput {
                exit_code: 0,
                output: String::new(),
            }))
    }
}

/// Write a ZIP archive at `path` containing the given (name, contents) entries.
pub(crate) fn write_zip(path: &Path, files: &[(&str, &str)]) {
    let file = fs::File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);

    for (name, contents) in files {
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }

    writer.finish().unwrap();
}

/// Populate `dir` the way a checker installation ships: every provided file
/// at the top level and every provided test file under tests/.
pub(crate) fn seed_provided_dir(dir: &Path, config: &AssignmentConfig) {
    for name in &config.provided_files {
        fs::write(dir.join(name), format!("/* provided: {} */\n", name)).unwrap();
    }

    let tests = dir.join(TESTS_DIR);
    fs::create_dir_all(&tests).unwrap();
    for name in &config.provided_test_files {
        fs::write(tests.join(name), format!("/* provided test: {} */\n", name)).unwrap();
    }
}
