use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{ExportDir, REFERENCE_LOG};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_tabcsv"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabcsv"))
        .stdout(predicate::str::contains("--header-line"));
}

#[test]
fn missing_target_argument_is_a_configuration_error() {
    Command::new(env!("CARGO_BIN_EXE_tabcsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration Error"));
}

#[test]
fn missing_directory_fails() {
    let dir = ExportDir::new();
    Command::new(env!("CARGO_BIN_EXE_tabcsv"))
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn empty_directory_succeeds() {
    let dir = ExportDir::new();
    dir.command(&[])
        .assert()
        .success()
        .stdout(predicate::str::contains("No eligible files"));
}

#[test]
fn strict_turns_skips_into_failure_exit() {
    let dir = ExportDir::new();
    dir.add("a.txt", REFERENCE_LOG);
    dir.add("b.txt", "short\n");

    dir.command(&[]).assert().success();
    dir.command(&["--strict"]).assert().code(1);
    assert!(dir.exists("a.csv"));
}

#[test]
fn bad_flag_values_are_usage_errors() {
    let dir = ExportDir::new();
    dir.command(&["--header-line", "0"]).assert().code(2);
    dir.command(&["--separator", ";;"]).assert().code(2);
    dir.command(&["--extension", "csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Application Error"));
}
