use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    Command::cargo_bin("signon")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--no-open"));
}

#[test]
fn test_config_help_shows_subcommands() {
    Command::cargo_bin("signon")
        .unwrap()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("signon")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
