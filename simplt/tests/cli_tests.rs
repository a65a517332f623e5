//! CLI Interface E2E Tests
//!
//! These tests run the simplt binary against the fixture programs and
//! check its output streams and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Build a simplt command isolated from any user or project configuration.
fn simplt(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_simplt"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("SIMPLT_VERBOSE")
        .env_remove("SIMPLT_CONFIG")
        .env_remove("SIMPLT_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenize").and(predicate::str::contains("check")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tokenize_text_output() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let output = simplt(&home)
        .arg("tokenize")
        .arg(fixtures_dir().join("factorial.sc"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout is UTF-8");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 37);
    assert_eq!(lines[0], "TOKEN: INT | TYPE: KEYWORD | LINE: 1");
    assert_eq!(lines[1], "TOKEN: fact | TYPE: IDENTIFIER | LINE: 1");
    assert!(lines.contains(&"TOKEN: > | TYPE: RELATIONAL_OPERATOR | LINE: 3"));
    assert!(lines.contains(&"TOKEN: RETURN | TYPE: KEYWORD | LINE: 7"));
    assert_eq!(lines[36], "TOKEN: EOF | TYPE: EOF | LINE: 9");
}

#[test]
fn test_tokenize_json_output() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let output = simplt(&home)
        .args(["tokenize", "--format", "json"])
        .arg(fixtures_dir().join("bad_chars.sc"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tokens: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let tokens = tokens.as_array().expect("JSON array");
    assert_eq!(tokens.len(), 22);
    assert_eq!(tokens[0]["kind"], "KEYWORD");
    assert_eq!(tokens[0]["text"], "INT");
    assert_eq!(tokens[15]["kind"], "LOGICAL_OPERATOR");
    assert_eq!(tokens[21]["text"], "EOF");
    assert_eq!(tokens[21]["line"], 4);
}

#[test]
fn test_tokenize_reports_unrecognized_on_stderr() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .arg("tokenize")
        .arg(fixtures_dir().join("bad_chars.sc"))
        .assert()
        .success()
        .stdout(predicate::str::contains("TOKEN: 2 | TYPE: NUMBER | LINE: 2"))
        .stdout(predicate::str::contains("@").not())
        .stderr(predicate::str::contains(
            "error[E1001]: Unrecognized character '@' at line 2",
        ));
}

#[test]
fn test_tokenize_strict_fails() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .args(["tokenize", "--strict"])
        .arg(fixtures_dir().join("bad_chars.sc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized character(s) found"));
}

#[test]
fn test_tokenize_multiple_files_in_order() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let output = simplt(&home)
        .args(["tokenize", "-j", "2"])
        .arg(fixtures_dir().join("factorial.sc"))
        .arg(fixtures_dir().join("bad_chars.sc"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout is UTF-8");
    let first = stdout.find("factorial.sc <==").expect("first header");
    let second = stdout.find("bad_chars.sc <==").expect("second header");
    assert!(first < second);
    assert_eq!(stdout.matches("TYPE: EOF").count(), 2);
}

#[test]
fn test_tokenize_missing_file() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .args(["tokenize", "does_not_exist.sc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input path does not exist"));
}

#[test]
fn test_tokenize_requires_files() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home).arg("tokenize").assert().failure();
}

#[test]
fn test_check_clean_file() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .arg("check")
        .arg(fixtures_dir().join("factorial.sc"))
        .assert()
        .success()
        .stdout(predicate::str::contains("factorial.sc: ok (37 token(s), 0 error(s))"));
}

#[test]
fn test_check_dirty_file_fails() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .arg("check")
        .arg(fixtures_dir().join("factorial.sc"))
        .arg(fixtures_dir().join("bad_chars.sc"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("factorial.sc: ok"))
        .stdout(predicate::str::contains("bad_chars.sc: FAILED (22 token(s), 1 error(s))"))
        .stderr(predicate::str::contains("bad_chars.sc:2:7: error[E1001]"));
}

#[test]
fn test_tokenize_non_utf8_file() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let source = home.path().join("latin1.sc");
    std::fs::write(&source, b"int x = 1;\ny \xE9 = 2;\n").expect("Failed to write source");

    simplt(&home)
        .arg("tokenize")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("TOKEN: y | TYPE: IDENTIFIER | LINE: 2"))
        .stdout(predicate::str::contains("TOKEN: EOF | TYPE: EOF | LINE: 3"))
        .stderr(predicate::str::contains("latin1.sc:2:3: error[E1001]"));
}

#[test]
fn test_config_file_in_current_directory() {
    let home = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        home.path().join("simplt.toml"),
        "[tokenize]\nformat = \"json\"\nstrict = true\n",
    )
    .expect("Failed to write config");

    simplt(&home)
        .arg("tokenize")
        .arg(fixtures_dir().join("factorial.sc"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"kind\":\"KEYWORD\""));

    simplt(&home)
        .arg("tokenize")
        .arg(fixtures_dir().join("bad_chars.sc"))
        .assert()
        .failure();
}

#[test]
fn test_explicit_config_must_exist() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .args(["--config", "missing.toml", "check"])
        .arg(fixtures_dir().join("factorial.sc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let home = TempDir::new().expect("Failed to create temp directory");
    simplt(&home)
        .args(["tokenize", "--format", "yaml"])
        .arg(fixtures_dir().join("factorial.sc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: yaml"));
}
