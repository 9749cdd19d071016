//! CLI Interface E2E Tests
//!
//! These tests verify the CLI interface of the joosc scanner: help and
//! version output, lexeme listings, exit codes and diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

/// Get the path to the joosc binary
fn joosc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_joosc"))
}

/// Write `source` to a file in a fresh temp directory.
fn source_file(source: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("Main.java");
    fs::write(&path, source).expect("Failed to write source");
    (temp_dir, path)
}

#[test]
fn test_cli_help() {
    Command::new(joosc_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("joosc")));
}

#[test]
fn test_cli_version() {
    Command::new(joosc_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_missing_argument() {
    Command::new(joosc_bin()).assert().code(2);
}

#[test]
fn test_cli_declaration_succeeds() {
    let (_dir, path) = source_file("int x = 5;");
    Command::new(joosc_bin())
        .arg(&path)
        .assert()
        .code(0)
        .stdout(
            "1:1\tKEYWORD(int)\n1:5\tIDENTIFIER(x)\n1:7\tASSIGN\n1:9\tNUMBER(5)\n1:10\tSEMICOL\n",
        );
}

#[test]
fn test_cli_verbose_logs_to_stderr_only() {
    let (_dir, path) = source_file("int x = 5;");
    Command::new(joosc_bin())
        .arg("-v")
        .arg(&path)
        .env("JOOSC_NO_COLOR", "1")
        .assert()
        .code(0)
        .stdout(
            "1:1\tKEYWORD(int)\n1:5\tIDENTIFIER(x)\n1:7\tASSIGN\n1:9\tNUMBER(5)\n1:10\tSEMICOL\n",
        )
        .stderr(predicate::str::contains("scanned file"));
}

#[test]
fn test_cli_unrecognized_character_exit_42() {
    let (_dir, path) = source_file("int x = 5@;");
    Command::new(joosc_bin())
        .arg(&path)
        .assert()
        .code(42)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error[E1001]: unrecognized character '@'"))
        .stderr(predicate::str::contains(":1:10"))
        .stderr(predicate::str::contains("aborting due to 1 lexical error"));
}

#[test]
fn test_cli_quiet() {
    let (_dir, path) = source_file("int x = 5;");
    Command::new(joosc_bin())
        .arg("--quiet")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_emit_json() {
    let (_dir, path) = source_file("x = \"a\\nb\";");
    let output = Command::new(joosc_bin())
        .args(["--emit", "json"])
        .arg(&path)
        .output()
        .expect("Failed to run joosc");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let records = records.as_array().expect("JSON array");
    assert_eq!(records.len(), 4);
    assert_eq!(records[2]["kind"], "STRING");
    assert_eq!(records[2]["value"], "a\nb");
    assert_eq!(records[2]["length"], 6);
}

#[test]
fn test_cli_unreadable_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    Command::new(joosc_bin())
        .arg(temp_dir.path().join("Missing.java"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: cannot read"));
}

#[test]
fn test_cli_empty_file() {
    let (_dir, path) = source_file("  \n\t\n");
    Command::new(joosc_bin())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_valid_fixture() {
    Command::new(joosc_bin())
        .arg(fixtures_dir().join("valid").join("Counter.java"))
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYWORD(class)"))
        .stdout(predicate::str::contains("CHAR('\\t')"))
        .stdout(predicate::str::contains("STRING(\"done\\n\")"))
        .stdout(predicate::str::contains("MALFORMED").not());
}

#[test]
fn test_cli_non_utf8_byte_exit_42() {
    let (_dir, path) = source_file(b"int x = 5;\xe9");
    Command::new(joosc_bin())
        .arg(&path)
        .assert()
        .code(42)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error[E1001]: unrecognized character"))
        .stderr(predicate::str::contains(":1:11"))
        .stderr(predicate::str::contains("aborting due to 1 lexical error"));
}

#[test]
fn test_cli_unterminated_fixture() {
    Command::new(joosc_bin())
        .arg(fixtures_dir().join("bad").join("Unterminated.java"))
        .assert()
        .code(42)
        .stderr(predicate::str::contains("error[E1002]: unterminated string literal"))
        .stderr(predicate::str::contains("Unterminated.java:3:16"));
}

#[test]
fn test_cli_bad_escape_fixture() {
    Command::new(joosc_bin())
        .arg(fixtures_dir().join("bad").join("BadEscape.java"))
        .assert()
        .code(42)
        .stderr(predicate::str::contains("error[E1005]"))
        .stderr(predicate::str::contains("error[E1002]: unterminated character literal"))
        .stderr(predicate::str::contains("aborting due to 2 lexical errors"));
}
