// tests/integration/output_formats.rs
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{ExportDir, REFERENCE_LOG};

#[test]
fn table_report_summarises_the_batch() {
    let dir = ExportDir::new();
    dir.add("a.txt", REFERENCE_LOG);
    dir.add("b.txt", "short\n");

    dir.command(&[])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt -> a.csv"))
        .stdout(predicate::str::contains("1 converted, 1 skipped, 0 failed"));
}

#[test]
fn json_report_lists_each_file() {
    let dir = ExportDir::new();
    dir.add("a.txt", REFERENCE_LOG);
    dir.add("b.txt", "short\n");

    let output = dir.command(&["--format", "json", "-q"]).output().unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["status"], "converted");
    assert_eq!(files[0]["rows"], 2);
    assert_eq!(files[0]["columns"], 2);
    assert_eq!(files[1]["status"], "skipped");
    assert!(files[1]["reason"].as_str().unwrap().contains("line 4"));
}

#[test]
fn yaml_report() {
    let dir = ExportDir::new();
    dir.add("a.txt", REFERENCE_LOG);

    dir.command(&["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: converted"));
}

#[test]
fn quiet_suppresses_warnings() {
    let dir = ExportDir::new();
    dir.add("b.txt", "short\n");

    dir.command(&["-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped").not());
}
