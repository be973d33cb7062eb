use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn todo() -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env_remove("TODO_FILTER")
        .env_remove("TODO_CONFIG")
        .env_remove("TODO_DEBUG_LOG");
    cmd
}

#[test]
fn test_help_describes_the_tool() {
    todo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A terminal todo list editor"))
        .stdout(predicate::str::contains("--filter"));
}

#[test]
fn test_completions_for_bash() {
    todo()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo"));
}

#[test]
fn test_config_command_reads_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    fs::write(&file, "default_filter = \"others\"\ntick_rate_ms = 25\n").unwrap();

    todo()
        .args(["--config", file.to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filter: others"))
        .stdout(predicate::str::contains("tick_rate_ms: 25"));
}

#[test]
fn test_filter_flag_overrides_config_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    fs::write(&file, "default_filter = \"others\"\n").unwrap();

    todo()
        .args([
            "--config",
            file.to_str().unwrap(),
            "--filter",
            "important",
            "config",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("filter: important"));
}

#[test]
fn test_filter_env_var_is_honoured() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    fs::write(&file, "").unwrap();

    todo()
        .env("TODO_FILTER", "important")
        .args(["--config", file.to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filter: important"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    fs::write(&file, "default_filter = [\n").unwrap();

    todo()
        .args(["--config", file.to_str().unwrap(), "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("absent.toml");

    todo()
        .args(["--config", file.to_str().unwrap(), "config"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_filter_is_rejected() {
    todo()
        .args(["--filter", "starred", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown view"));
}
