use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("legend-lint").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("legend-lint"));
}

#[test]
fn valid_file_passes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legends.json");
    fs::write(
        &path,
        r#"[{ "anchor": "bottom", "direction": "row", "itemWidth": 100, "itemHeight": 24 }]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("legend-lint").unwrap();
    cmd.arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("legend[0]: ok"));
}

#[test]
fn invalid_file_fails_and_names_the_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legend.json");
    // a single object (not wrapped in an array) is also accepted
    fs::write(
        &path,
        r#"{ "direction": "row", "itemWidth": 100, "itemHeight": 24 }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("legend-lint").unwrap();
    cmd.arg(&path);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("anchor"));
}

#[test]
fn json_report_is_parseable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legend.json");
    fs::write(
        &path,
        r#"{ "anchor": "diagonal", "direction": "row", "itemWidth": 100, "itemHeight": 24 }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("legend-lint").unwrap();
    cmd.args([path.to_str().unwrap(), "--format", "json"]);
    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["valid"], serde_json::json!(false));
    assert_eq!(results[0]["errors"][0]["path"], serde_json::json!("anchor"));
}

#[test]
fn report_format_is_inferred_from_out_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("legends.json");
    let out = dir.path().join("report.json");
    fs::write(
        &input,
        r#"[{ "anchor": "bottom", "direction": "row", "itemWidth": 100, "itemHeight": 24 }]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("legend-lint").unwrap();
    cmd.args([input.to_str().unwrap(), "--out", out.to_str().unwrap()]);
    cmd.assert().success();
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report[0]["valid"], serde_json::json!(true));
}

#[test]
fn unreadable_file_is_a_hard_error() {
    let mut cmd = Command::cargo_bin("legend-lint").unwrap();
    cmd.arg("does-not-exist.json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}
