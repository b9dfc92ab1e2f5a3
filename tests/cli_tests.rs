// CLI smoke tests for the tagscan binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn write_fixture(name: &str, content: &str) -> String {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn outline_reports_complete_pairs() {
    let file = write_fixture("tagscan_outline.xml", "<root>\n<item></item>\n</root>\n");

    let mut cmd = Command::cargo_bin("tagscan").unwrap();
    cmd.arg("outline").arg(&file);
    cmd.assert()
        .success()
        .stdout(contains("complete").and(contains("item")).and(contains("root")));

    let _ = fs::remove_file(&file);
}

#[test]
fn outline_json_emits_events_and_open_stack() {
    let file = write_fixture("tagscan_outline_json.xml", "<a><b></a>\n<open>\n");

    let mut cmd = Command::cargo_bin("tagscan").unwrap();
    cmd.arg("outline").arg(&file).arg("--json");
    cmd.assert()
        .success()
        .stdout(contains("\"unclosed\"").and(contains("\"open\"")));

    let _ = fs::remove_file(&file);
}

#[test]
fn outline_rejects_out_of_range_end_line_with_diagnostic() {
    let file = write_fixture("tagscan_range.xml", "<a></a>\n");

    let mut cmd = Command::cargo_bin("tagscan").unwrap();
    cmd.arg("outline").arg(&file).arg("--end-line").arg("99");
    cmd.assert()
        .failure()
        .stderr(contains("tagscan::scan::end_line_out_of_range"));

    let _ = fs::remove_file(&file);
}

#[test]
fn context_prints_the_open_hierarchy() {
    let file = write_fixture("tagscan_context.xml", "<html>\n<body>\n<div>\n</div>\n");

    let mut cmd = Command::cargo_bin("tagscan").unwrap();
    cmd.arg("context").arg(&file).arg("2");
    cmd.assert()
        .success()
        .stdout(contains("html > body > div"));

    let _ = fs::remove_file(&file);
}

#[test]
fn caret_detects_an_open_tag() {
    let file = write_fixture("tagscan_caret.xml", "<note att");

    let mut cmd = Command::cargo_bin("tagscan").unwrap();
    cmd.arg("caret").arg(&file).arg("9");
    cmd.assert().success().stdout(contains("inside tag: yes"));

    let _ = fs::remove_file(&file);
}

#[test]
fn missing_file_fails_cleanly() {
    let mut cmd = Command::cargo_bin("tagscan").unwrap();
    cmd.arg("outline").arg("no_such_file.xml");
    cmd.assert()
        .failure()
        .stderr(contains("Error reading file"));
}
