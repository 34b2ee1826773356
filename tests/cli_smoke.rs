// tests/cli_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn file_meta() -> Command {
    Command::new(env!("CARGO_BIN_EXE_file_meta"))
}

#[test]
fn shows_help() {
    file_meta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_meta"));
}

#[test]
fn requires_a_path() {
    file_meta().assert().failure();
}

#[test]
fn missing_path_fails_and_names_it() {
    file_meta()
        .env_remove("RUST_LOG")
        .arg("no/such/entry")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WARN").and(predicate::str::contains("Error processing no/such/entry")));
}

#[test]
fn per_path_errors_follow_the_log_filter() {
    file_meta()
        .env("RUST_LOG", "error")
        .arg("no/such/entry")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error processing").not());
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("opts.json");
    std::fs::write(&config, r#"{"timezone": 3}"#).unwrap();

    file_meta()
        .args(["--config", config.to_str().unwrap(), "Cargo.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
}

#[cfg(unix)]
#[test]
fn prints_one_json_record_per_path() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hello.txt");
    std::fs::write(&file, "hi").unwrap();
    std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644)).unwrap();

    let output = file_meta()
        .args(["--utc", file.to_str().unwrap(), "Cargo.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> =
        stdout.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["path"], file.to_str().unwrap());
    assert_eq!(records[0]["permissions"], "0644");
    assert!(records[0]["time"]["access"].as_str().unwrap().ends_with("+00:00"));
    assert_eq!(records[1]["path"], "Cargo.toml");
}

#[cfg(unix)]
#[test]
fn one_failure_does_not_hide_other_records() {
    file_meta()
        .args(["Cargo.toml", "no/such/entry"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"path\":\"Cargo.toml\""))
        .stderr(predicate::str::contains("no/such/entry"));
}
