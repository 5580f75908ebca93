//! Sub-project compilation.
//!
//! Each sub-project is compiled with one compiler invocation over the sources
//! its globs resolve to. All sub-projects are attempted even after a failure
//! so the submitter sees every compile error in one pass.

use crate::config::{AssignmentConfig, SourceGlob, SubProject};
use crate::error::{CheckError, Result};
use crate::process::ProcessRunner;
use globset::Glob;
use std::fs;
use std::path::Path;

/// Expand the sub-project's (subdirectory, pattern) pairs against the working
/// directory.
///
/// Returns paths relative to the working directory (`subdir/name`), sorted
/// within each pair so the compiler command line is deterministic. A missing
/// subdirectory contributes no sources; whether that is fatal is the
/// compiler's call.
pub fn resolve_sources(work_dir: &Path, globs: &[SourceGlob]) -> Result<Vec<String>> {
    let mut sources = Vec::new();

    for source in globs {
        let matcher = Glob::new(&source.pattern)
            .map_err(|e| {
                CheckError::UserError(format!(
                    "invalid source pattern '{}': {}",
                    source.pattern, e
                ))
            })?
            .compile_matcher();

        let dir = if source.subdir.is_empty() {
            work_dir.to_path_buf()
        } else {
            work_dir.join(&source.subdir)
        };
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        let mut matched = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                CheckError::UserError(format!("cannot list '{}': {}", dir.display(), e))
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if matcher.is_match(&name) {
                if source.subdir.is_empty() {
                    matched.push(name);
                } else {
                    matched.push(format!("{}/{}", source.subdir, name));
                }
            }
        }
        matched.sort();
        sources.extend(matched);
    }

    Ok(sources)
}

/// Compile one sub-project, printing the compiler's full output.
///
/// Returns whether the compiler exited zero.
pub fn compile_part<R: ProcessRunner>(
    runner: &R,
    work_dir: &Path,
    config: &AssignmentConfig,
    part: &SubProject,
) -> Result<bool> {
    let argv = config.compiler_argv()?;
    let program = &argv[0];

    let mut args: Vec<String> = argv[1..].to_vec();
    args.extend(config.base_compiler_args.iter().cloned());
    args.extend(resolve_sources(work_dir, &part.sources)?);
    args.push("-o".to_string());
    args.push(part.exec_name.clone());
    args.extend(part.extra_args.iter().cloned());

    println!(
        "Compiling {}... (command: {} {})",
        part.name,
        program,
        args.join(" ")
    );

    let output = runner.run(program, &args, work_dir).map_err(|e| {
        CheckError::UserError(format!(
            "failed to run compiler '{}': {}\n\
             Fix: ensure the compiler is installed and in PATH.",
            program, e
        ))
    })?;

    if !output.output.is_empty() {
        println!("{}", output.output.trim_end_matches('\n'));
    }
    if !output.success() {
        println!("ERROR: couldn't compile {}", part.name);
        return Ok(false);
    }

    Ok(true)
}

/// Compile every sub-project, attempting all of them even after a failure.
///
/// Returns true only if every compile exited zero.
pub fn compile_all<R: ProcessRunner>(
    runner: &R,
    work_dir: &Path,
    config: &AssignmentConfig,
) -> Result<bool> {
    let mut all_ok = true;
    for part in &config.parts {
        if !compile_part(runner, work_dir, config, part)? {
            all_ok = false;
        }
    }
    Ok(all_ok)
}
