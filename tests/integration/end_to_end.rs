// tests/integration/end_to_end.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{ExportDir, REFERENCE_CSV, REFERENCE_LOG};

#[test]
fn converts_reference_log() {
    let dir = ExportDir::new();
    dir.add("run.txt", REFERENCE_LOG);

    dir.command(&[]).assert().success();

    assert_eq!(dir.read("run.csv"), REFERENCE_CSV);
    assert_eq!(dir.read("run.txt"), REFERENCE_LOG);
}

#[test]
fn commas_and_quotes_survive_csv_quoting() {
    let dir = ExportDir::new();
    dir.add(
        "q.txt",
        "m\nm\nm\nid\tname\tnote\nm\n1\tSmith, J\tsaid \"hi\"\n",
    );

    dir.command(&[]).assert().success();

    let mut reader = csv::Reader::from_path(dir.path().join("q.csv")).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["name", "note"]);
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(row.iter().collect::<Vec<_>>(), ["Smith, J", "said \"hi\""]);
}

#[test]
fn short_file_is_skipped_with_warning() {
    let dir = ExportDir::new();
    dir.add("short.txt", "only\ntwo\n");
    dir.add("good.txt", REFERENCE_LOG);

    dir.command(&[])
        .assert()
        .success()
        .stderr(predicate::str::contains("short.txt"))
        .stderr(predicate::str::contains("skipped"));

    assert!(!dir.exists("short.csv"));
    assert_eq!(dir.read("good.csv"), REFERENCE_CSV);
}

#[test]
fn rerun_produces_identical_output() {
    let dir = ExportDir::new();
    dir.add("a.txt", REFERENCE_LOG);
    dir.add("b.txt", "m\nm\nm\nX\tP\tQ\tR\nm\n1\tp\tq\tr\textra\n");

    dir.command(&[]).assert().success();
    let first = (dir.read("a.csv"), dir.read("b.csv"));
    dir.command(&[]).assert().success();
    assert_eq!((dir.read("a.csv"), dir.read("b.csv")), first);
    assert_eq!(first.1, "P,Q,R\np,q,r\n");
}

#[test]
fn nested_directories_are_not_visited() {
    let dir = ExportDir::new();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    dir.add("sub/inner.txt", REFERENCE_LOG);
    dir.add("notes.md", REFERENCE_LOG);

    dir.command(&[]).assert().success();

    assert!(!dir.exists("sub/inner.csv"));
    assert!(!dir.exists("notes.csv"));
}

#[test]
fn custom_layout_via_flags() {
    let dir = ExportDir::new();
    dir.add("x.log", "meta\nrow;A;B\n1;a;b\n");

    dir.command(&[
        "--extension",
        "log",
        "--separator",
        ";",
        "--exclude-lines",
        "1",
        "--header-line",
        "2",
        "--line-ending",
        "crlf",
    ])
    .assert()
    .success();

    assert_eq!(dir.read("x.csv"), "A,B\r\na,b\r\n");
}

#[test]
fn shift_jis_input_is_written_as_utf8() {
    let dir = ExportDir::new();
    // "名前" / "テスト" in Shift_JIS
    let mut bytes = b"m\nm\nm\nX\t".to_vec();
    bytes.extend_from_slice(b"\x96\xbc\x91\x4f");
    bytes.extend_from_slice(b"\nm\n1\t");
    bytes.extend_from_slice(b"\x83\x65\x83\x58\x83\x67");
    bytes.push(b'\n');
    dir.add("sj.txt", bytes);

    dir.command(&["--encoding", "shift_jis"]).assert().success();

    assert_eq!(dir.read("sj.csv"), "名前\nテスト\n");
}

#[test]
fn settings_file_supplies_defaults() {
    let dir = ExportDir::new();
    dir.add("t.txt", "h\tA\n1\tz\n");
    let settings = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    std::fs::write(settings.path(), "excluded_lines: []\nheader_line: 1\n").unwrap();

    dir.command(&["--config", settings.path().to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(dir.read("t.csv"), "A\nz\n");
}
