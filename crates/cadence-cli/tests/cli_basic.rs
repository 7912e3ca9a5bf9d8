//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a temporary directory,
//! so configuration never touches the real user profile.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_cadence"))
        .args(args)
        .env("HOME", home)
        .env_remove("CADENCE_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

fn write_commitment(dir: &TempDir, json: &str) -> String {
    let path = dir.path().join("habit.json");
    std::fs::write(&path, json).unwrap();
    path.to_string_lossy().into_owned()
}

const DAILY: &str = r#"{"schedule":{"repeat":"DAILY","startDate":"2024-01-01"},
    "completedDates":["2024-01-01","2024-01-02","2024-01-03"]}"#;

#[test]
fn test_schedule_due() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(&dir, DAILY);

    let out = run_cli_success(dir.path(), &["schedule", "due", &file, "--date", "2024-01-05"]);
    assert_eq!(out.trim(), "due");

    let out = run_cli_success(dir.path(), &["schedule", "due", &file, "--date", "2023-12-31"]);
    assert_eq!(out.trim(), "not due");
}

#[test]
fn test_schedule_due_json() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(&dir, DAILY);

    let out = run_cli_success(
        dir.path(),
        &["schedule", "due", &file, "--date", "2024-01-05", "--json"],
    );
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["due"], true);
    assert_eq!(parsed["inRange"], true);
    assert_eq!(parsed["date"], "2024-01-05");
}

#[test]
fn test_schedule_next_and_prev() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(
        &dir,
        r#"{"schedule":{"repeat":"INTERVAL_DAYS","intervalDays":3,"startDate":"2024-01-01"}}"#,
    );

    let out = run_cli_success(dir.path(), &["schedule", "next", &file, "--from", "2024-01-05"]);
    assert_eq!(out.trim(), "2024-01-07");

    let out = run_cli_success(dir.path(), &["schedule", "prev", &file, "--from", "2024-01-05"]);
    assert_eq!(out.trim(), "2024-01-04");

    let out = run_cli_success(
        dir.path(),
        &["schedule", "next", &file, "--from", "2024-01-05", "--horizon", "1"],
    );
    assert_eq!(out.trim(), "none");
}

#[test]
fn test_schedule_show_json() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(
        &dir,
        r#"{"schedule":{"repeat":"DAILY","startDate":"2024-01-01","endDate":"2024-01-31"}}"#,
    );

    let out = run_cli_success(
        dir.path(),
        &["schedule", "show", &file, "--date", "2024-02-10", "--json"],
    );
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["label"], "Daily");
    assert_eq!(parsed["summary"], "Daily · Started Jan 1 · Ends Jan 31");
    assert_eq!(parsed["status"], "Ended Jan 31");
}

#[test]
fn test_schedule_check_reports_problems() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(
        &dir,
        r#"{"schedule":{"repeat":"CUSTOM_WEEKDAYS","daysOfWeek":[],"startDate":"2024-01-01"}}"#,
    );

    let (_, stderr, code) = run_cli(dir.path(), &["schedule", "check", &file]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no days selected"));
}

#[test]
fn test_streak_commands() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(&dir, DAILY);

    let out = run_cli_success(dir.path(), &["streak", "current", &file, "--today", "2024-01-03"]);
    assert_eq!(out.trim(), "3");

    let out = run_cli_success(dir.path(), &["streak", "best", &file]);
    assert_eq!(out.trim(), "3");

    let out = run_cli_success(dir.path(), &["streak", "summary", &file, "--today", "2024-01-05"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["current"], 0);
    assert_eq!(parsed["best"], 3);
}

#[test]
fn test_record_toggle_rewrites_canonical_shape() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(&dir, DAILY);

    let out = run_cli_success(dir.path(), &["record", "toggle", &file, "--date", "2024-01-04"]);
    assert_eq!(out.trim(), "marked 2024-01-04");

    let raw = std::fs::read_to_string(&file).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["completions"]["2024-01-04"], true);
    assert!(parsed.get("completedDates").is_none());

    let out = run_cli_success(dir.path(), &["streak", "current", &file, "--today", "2024-01-04"]);
    assert_eq!(out.trim(), "4");

    run_cli_success(dir.path(), &["record", "unmark", &file, "--date", "2024-01-02"]);
    let out = run_cli_success(dir.path(), &["record", "list", &file]);
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["2024-01-01", "2024-01-03", "2024-01-04"]);
}

#[test]
fn test_invalid_date_argument() {
    let dir = TempDir::new().unwrap();
    let file = write_commitment(&dir, DAILY);

    let (_, _, code) = run_cli(dir.path(), &["schedule", "due", &file, "--date", "01/05/2024"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_get_set_reset() {
    let dir = TempDir::new().unwrap();

    let out = run_cli_success(dir.path(), &["config", "get", "search.next_horizon_days"]);
    assert_eq!(out.trim(), "60");

    run_cli_success(dir.path(), &["config", "set", "search.next_horizon_days", "5"]);
    let out = run_cli_success(dir.path(), &["config", "get", "search.next_horizon_days"]);
    assert_eq!(out.trim(), "5");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "search.bogus", "1"]);
    assert_ne!(code, 0);

    run_cli_success(dir.path(), &["config", "reset"]);
    let out = run_cli_success(dir.path(), &["config", "get", "search.next_horizon_days"]);
    assert_eq!(out.trim(), "60");
}
