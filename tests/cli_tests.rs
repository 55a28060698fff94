//! CLI tests for the cexplain binary
//!
//! Only the offline subcommands are exercised here; `exec` talks to the
//! remote toolchain and is covered by the service-boundary tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_reports_beginner_mistakes() {
    let source = write_temp("int main(void) {\n    int x = 1;\n    if(x=5) x = 2;\n    return 0;\n}\n");
    let mut cmd = Command::cargo_bin("cexplain").unwrap();
    cmd.arg("check")
        .arg(source.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3行"))
        .stdout(predicate::str::contains("==を使用します"));
}

#[test]
fn test_check_clean_file_prints_nothing() {
    let source = write_temp("int main(void) {\n    return 0;\n}\n");
    let mut cmd = Command::cargo_bin("cexplain").unwrap();
    cmd.arg("check")
        .arg(source.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_json_output_is_parseable() {
    let source = write_temp("if(x=5);\n");
    let mut cmd = Command::cargo_bin("cexplain").unwrap();
    let output = cmd
        .arg("--format")
        .arg("json")
        .arg("check")
        .arg(source.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let findings: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(findings[0]["row"], 1);
    assert_eq!(findings[0]["column"], 0);
}

#[test]
fn test_resolve_reads_raw_output_from_stdin() {
    let raw = "prog.c: In function 'main':\nprog.c:5:5: error: expected ';' before 'return'\n";
    let mut cmd = Command::cargo_bin("cexplain").unwrap();
    cmd.arg("resolve")
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("5行5列"))
        .stdout(predicate::str::contains("';'を追加してください"));
}

#[test]
fn test_resolve_json_preserves_raw_error() {
    let raw = "prog.c:9:1: error: never seen before warning-free oddity\n";
    let mut cmd = Command::cargo_bin("cexplain").unwrap();
    let output = cmd
        .arg("--format")
        .arg("json")
        .arg("resolve")
        .write_stdin(raw)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let resolved: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(resolved[0]["row"], 9);
    assert_eq!(resolved[0]["description"], "まれなエラーが発生しています。");
    assert!(resolved[0]["raw_error"]
        .as_str()
        .unwrap()
        .starts_with("9:1: error:"));
}

#[test]
fn test_missing_file_is_a_hard_error() {
    let mut cmd = Command::cargo_bin("cexplain").unwrap();
    cmd.arg("check")
        .arg("/no/such/file.c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
