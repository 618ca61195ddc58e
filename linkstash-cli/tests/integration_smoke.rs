//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("linkstash").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("linkstash").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SQLite database URL"));
}

#[test]
fn test_init_db_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("links.db");

    let mut cmd = Command::cargo_bin("linkstash").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("init-db")
        .arg("--database-url")
        .arg(format!("sqlite://{}", path.display()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));
    assert!(path.exists());
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("linkstash").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
