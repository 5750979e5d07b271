//! End-to-end smoke tests for the `huddle` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn huddle() -> Command {
    Command::cargo_bin("huddle").unwrap()
}

#[test]
fn test_version_prints_app_name() {
    huddle()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Huddle"));
}

#[test]
fn test_package_rejects_invalid_server_host() {
    huddle()
        .args(["package", "--server-host", "bad host!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server host"));
}

#[test]
fn test_package_rejects_zero_participants() {
    huddle()
        .args(["package", "--participants", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid deployment parameters"));
}

#[test]
fn test_package_requires_a_frontend() {
    let dir = TempDir::new().unwrap();

    huddle()
        .args(["package", "--yes"])
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No frontend found"));
}
