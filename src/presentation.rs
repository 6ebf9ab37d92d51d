// src/presentation.rs
use crate::options::ReportFormat;
use std::fmt::Write;
use std::path::Path;
use tabcsv_engine::report::{FileStatus, RunReport};

pub fn print_report(report: &RunReport, format: ReportFormat) {
    match format {
        ReportFormat::Table => print!("{}", render_table(report)),
        ReportFormat::Json => print_json(report),
        ReportFormat::Yaml => print_yaml(report),
    }
}

fn print_json(report: &RunReport) {
    if let Ok(json) = serde_json::to_string_pretty(report) {
        println!("{json}");
    }
}

fn print_yaml(report: &RunReport) {
    if let Ok(yaml) = serde_yaml::to_string(report) {
        print!("{yaml}");
    }
}

/// Plain-text status listing, one line per input file.
#[must_use]
pub fn render_table(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "tabcsv v{} · {}", crate::VERSION, report.target_dir.display());
    let _ = writeln!(out);

    if report.files.is_empty() {
        let _ = writeln!(out, "[tabcsv] No eligible files found.");
        return out;
    }

    let _ = writeln!(out, "STATUS         ROWS   COLS  FILE");
    let _ = writeln!(out, "----------------------------------------------");
    for file in &report.files {
        let name = file_name(&file.input);
        match &file.status {
            FileStatus::Converted { columns, rows } => {
                let _ = writeln!(
                    out,
                    "converted {rows:>9}{columns:>7}  {name} -> {}",
                    file_name(&file.output)
                );
            }
            FileStatus::Skipped { reason } => {
                let _ = writeln!(out, "skipped   {:>9}{:>7}  {name}: {reason}", "-", "-");
            }
            FileStatus::Failed { error } => {
                let _ = writeln!(out, "FAILED    {:>9}{:>7}  {name}: {error}", "-", "-");
            }
        }
    }

    let _ = writeln!(out, "---");
    let _ = writeln!(
        out,
        "[tabcsv] Completed: {} converted, {} skipped, {} failed ({} files).",
        report.converted(),
        report.skipped(),
        report.failed(),
        report.files.len()
    );
    out
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}
