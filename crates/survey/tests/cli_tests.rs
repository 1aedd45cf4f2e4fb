//! End-to-end tests for the survey binary.
//!
//! The API URL points at a closed local port so every fetch fails fast and
//! the snapshot fallback is exercised against the fixtures directory.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const UNREACHABLE_API: &str = "http://127.0.0.1:1";

/// Get the path to the fixtures directory
fn fixtures_path() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("fixtures")
}

fn fixture_snapshot() -> PathBuf {
    fixtures_path().join("snapshot.csv")
}

/// Build a survey command isolated from user config, with the API unreachable
fn survey_in(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("survey");
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SURVEY_CONFIG")
        .env_remove("SURVEY_TOKEN")
        .env_remove("SURVEY_SNAPSHOT")
        .env("SURVEY_TIMEOUT_SECS", "2")
        .args(["--api-url", UNREACHABLE_API]);
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help_command() {
    cargo_bin_cmd!("survey")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Survey open-source modeling tools hosted on GitHub",
        ));
}

#[test]
fn test_table_falls_back_to_snapshot() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .arg("--snapshot")
        .arg(fixture_snapshot())
        .args(["table", "--since", "2000-01-01"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: GitHub API search failed"))
        .stderr(predicate::str::contains("Warning: GitHub API is unavailable"))
        .stderr(predicate::str::contains(
            "Info: Loaded 6 repositories from snapshot data.",
        ))
        // Excluded by the curated list
        .stdout(predicate::str::contains("QuickUMLS").not())
        .stdout(predicate::str::contains(
            "Showing 5 repositories from snapshot data",
        ))
        .stdout(predicate::str::contains("ToolX"));
}

#[test]
fn test_table_json_rows_use_snapshot_columns() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(
        survey_in(&dir)
            .arg("--snapshot")
            .arg(fixture_snapshot())
            .args(["--format", "json", "table", "--since", "2000-01-01", "--min-stars", "300"]),
    );

    assert_eq!(json["outcome"], "remote_failed_fallback_ok");
    let signals = json["signals"].as_array().unwrap();
    assert_eq!(signals.len(), 3);
    assert_eq!(signals[0]["severity"], "error");
    assert!(signals[0]["message"]
        .as_str()
        .unwrap()
        .starts_with("GitHub API search failed"));
    assert_eq!(signals[1]["severity"], "warning");
    assert_eq!(signals[2]["severity"], "info");
    assert_eq!(
        signals[2]["message"],
        "Loaded 6 repositories from snapshot data."
    );
    assert_eq!(json["count"], 3);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows[0]["Name"], "plantuml");
    assert_eq!(rows[0]["Stars⭐"], "10870");
    assert_eq!(rows[2]["Name"], "modelia");
}

#[test]
fn test_missing_snapshot_leaves_no_records() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .args(["--snapshot", "does-not-exist.csv", "table"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no snapshot file was found"))
        .stdout(predicate::str::contains(
            "No repositories found or there was an error fetching data.",
        ));
}

#[test]
fn test_json_table_keeps_stderr_free_of_signals() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .arg("--snapshot")
        .arg(fixture_snapshot())
        .args(["--format", "json", "table"])
        .assert()
        .success()
        .stderr(predicate::str::contains("severity").not());
}

#[test]
fn test_malformed_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .arg("--snapshot")
        .arg(fixtures_path().join("snapshot_missing_columns.csv"))
        .arg("table")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Snapshot is missing required column 'First Commit'",
        ));
}

#[test]
fn test_malformed_snapshot_json_reports_remote_failure() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .arg("--snapshot")
        .arg(fixtures_path().join("snapshot_missing_columns.csv"))
        .args(["--format", "json", "table"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""severity":"error""#))
        .stderr(predicate::str::contains("GitHub API search failed"))
        .stderr(predicate::str::contains("missing required column"));
}

#[test]
fn test_analyze_ai_category() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(
        survey_in(&dir)
            .arg("--snapshot")
            .arg(fixture_snapshot())
            .args(["--format", "json", "analyze", "ai", "lowcode"]),
    );

    assert_eq!(json["outcome"], "remote_failed_fallback_ok");
    assert_eq!(json["signals"].as_array().unwrap().len(), 3);
    let reports = json["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["category"], "ai");
    assert_eq!(reports[0]["total"], 5);
    assert_eq!(reports[0]["matching_count"], 1);
    assert_eq!(reports[0]["matches"][0]["name"], "modelia");
    assert_eq!(reports[1]["category"], "lowcode");
    assert_eq!(reports[1]["matches"][0]["name"], "ToolX");
}

#[test]
fn test_analyze_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .arg("--snapshot")
        .arg(fixture_snapshot())
        .args(["analyze", "sysml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'sysml'"));
}

#[test]
fn test_stats_over_snapshot() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(
        survey_in(&dir)
            .env("SURVEY_ACTIVE_DAYS", "36500")
            .arg("--snapshot")
            .arg(fixture_snapshot())
            .args(["--format", "json", "stats"]),
    );

    assert_eq!(json["repositories"], 5);
    assert_eq!(json["signals"][1]["severity"], "warning");
    assert_eq!(json["first_commit_years"]["2010"], 1);
    assert_eq!(json["languages"][0]["language"], "Java");
    assert_eq!(json["languages"][0]["count"], 2);
    assert_eq!(json["stars"]["max"], 10870);
    assert_eq!(json["stars"]["min"], 75);
}

#[test]
fn test_snapshot_command_requires_remote() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("fresh.csv");
    survey_in(&dir)
        .arg("snapshot")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch repositories"));
    assert!(!output.exists());
}

#[test]
fn test_categories_lists_builtins() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("nocode: nocode, no-code, no code"))
        .stdout(predicate::str::contains("ai: ai, artificial intelligence"));
}

#[test]
fn test_config_file_categories() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("survey.toml");
    std::fs::write(
        &config,
        "[[categories]]\nname = \"sysml\"\nsynonyms = [\"sysml\"]\n",
    )
    .unwrap();

    survey_in(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("sysml: sysml"))
        .stdout(predicate::str::contains("plantuml").not());
}

#[test]
fn test_invalid_config_value_is_reported() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .env("SURVEY_PER_PAGE", "500")
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("per_page must be between 1 and 100"));
}

#[test]
fn test_active_days_out_of_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .env("SURVEY_ACTIVE_DAYS", "1000000000")
        .arg("--snapshot")
        .arg(fixture_snapshot())
        .arg("table")
        .assert()
        .failure()
        .stderr(predicate::str::contains("active_days must be between 0 and 36500"));
}

#[test]
fn test_completions_ignore_invalid_config() {
    let dir = TempDir::new().unwrap();
    survey_in(&dir)
        .env("SURVEY_PER_PAGE", "500")
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("survey"));
}

#[test]
fn test_completions() {
    cargo_bin_cmd!("survey")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("survey"));
}
