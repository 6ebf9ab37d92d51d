// crates/engine/src/lib.rs
//! Batch conversion of tab-separated log exports into CSV.
//!
//! [`header::extract_header`] reads the schema from a fixed line,
//! [`rows::transform_rows`] streams the data rows reconciled to that schema,
//! and [`run`] drives both over every eligible file of a directory.

use hashbrown::HashMap;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod header;
pub mod options;
pub mod processor;
pub mod report;
pub mod rows;
pub mod source;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::{FileOutcome, FileStatus, RunReport};

/// Convert every eligible file in `config.target_dir`, one after another.
///
/// Per-file problems never stop the batch: they are logged and recorded in
/// the returned report.
///
/// # Errors
///
/// Returns an error only when the batch cannot start: invalid configuration,
/// or a target directory that is missing or unreadable.
pub fn run(config: &Config) -> Result<RunReport> {
    config.validate()?;
    let inputs = filesystem::collect_inputs(&config.target_dir, config.input_extension())?;
    let mut report = RunReport::new(config.target_dir.clone());

    if inputs.is_empty() {
        info!(
            "no .{} files in {}",
            config.input_extension(),
            config.target_dir.display()
        );
        return Ok(report);
    }
    info!(
        "converting {} file(s) in {}",
        inputs.len(),
        config.target_dir.display()
    );

    // `a.txt` and `a.TXT` both map to `a.csv`; the first one converted wins.
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    for input in inputs {
        let output = filesystem::output_path_for(&input);
        let result = match claimed.get(&output) {
            Some(first) => Err(EngineError::OutputCollision {
                output: output.clone(),
                claimed_by: first.clone(),
            }),
            None => processor::process_file(&input, config),
        };
        if result.is_ok() {
            claimed.insert(output.clone(), input.clone());
        }
        let outcome = outcome_for(input, output, result);
        log_outcome(&outcome);
        report.files.push(outcome);
    }

    info!(
        "done: {} converted, {} skipped, {} failed",
        report.converted(),
        report.skipped(),
        report.failed()
    );
    Ok(report)
}

fn outcome_for(input: PathBuf, output: PathBuf, result: Result<processor::Conversion>) -> FileOutcome {
    let status = match result {
        Ok(conversion) => FileStatus::Converted {
            columns: conversion.columns,
            rows: conversion.rows,
        },
        Err(e) if e.is_skippable() => FileStatus::Skipped {
            reason: e.to_string(),
        },
        Err(e) => FileStatus::Failed {
            error: e.to_string(),
        },
    };
    FileOutcome {
        input,
        output,
        status,
    }
}

fn log_outcome(outcome: &FileOutcome) {
    let name = display_name(&outcome.input);
    match &outcome.status {
        FileStatus::Converted { columns, rows } => info!(
            "{name} -> {} ({rows} rows, {columns} columns)",
            display_name(&outcome.output)
        ),
        FileStatus::Skipped { reason } => warn!("{name}: skipped: {reason}"),
        FileStatus::Failed { error } => error!("{name}: failed: {error}"),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
