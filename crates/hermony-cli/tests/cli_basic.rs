//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::io::Write;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "hermony-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_events_sample() {
    let (stdout, _, code) = run_cli(&["events", "sample"]);
    assert_eq!(code, 0, "events sample failed");
    assert!(stdout.contains("Team Meeting"));
    assert!(stdout.contains("Family Time"));
}

#[test]
fn test_events_sample_json_parses() {
    let (stdout, _, code) = run_cli(&["events", "sample", "--json"]);
    assert_eq!(code, 0, "events sample --json failed");

    let events: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let events = events.as_array().expect("expected an array");
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["type"], "work");
}

#[test]
fn test_health_check_default_calendar() {
    let (_, _, code) = run_cli(&["health", "check"]);
    assert_eq!(code, 0, "health check failed");
}

#[test]
fn test_health_check_json_flags_overload() {
    // Six back-to-back meetings against the default limits: a streak
    // warning plus a count warning.
    let mut events_file = tempfile::NamedTempFile::new().unwrap();
    let events: Vec<serde_json::Value> = (0..6)
        .map(|i| {
            serde_json::json!({
                "id": i.to_string(),
                "title": format!("Meeting {i}"),
                "start": format!("2025-06-02T{:02}:00:00Z", 9 + i),
                "end": format!("2025-06-02T{:02}:00:00Z", 10 + i),
                "type": "work",
            })
        })
        .collect();
    write!(events_file, "{}", serde_json::Value::Array(events)).unwrap();

    let path = events_file.path().to_str().unwrap();
    let (stdout, _, code) = run_cli(&["health", "check", "--events", path, "--json"]);
    assert_eq!(code, 0, "health check --json failed");

    let findings: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let findings = findings.as_array().expect("expected an array");
    assert!(findings
        .iter()
        .any(|f| f["message"].as_str().unwrap().contains("hours straight")));
    assert!(findings
        .iter()
        .any(|f| f["message"].as_str().unwrap().contains("6 meetings")));
}

#[test]
fn test_summary_show() {
    let (stdout, _, code) = run_cli(&["summary", "show"]);
    assert_eq!(code, 0, "summary show failed");
    assert!(stdout.contains("Work/life ratio"));
}

#[test]
fn test_summary_show_json_for_demo_calendar() {
    let (stdout, _, code) = run_cli(&["summary", "show", "--json"]);
    assert_eq!(code, 0, "summary show --json failed");

    // Demo calendar: 4h work, 2h personal, 3 meetings, ratio 2.
    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(summary["work_hours"], 4.0);
    assert_eq!(summary["personal_hours"], 2.0);
    assert_eq!(summary["meeting_count"], 3);
    assert_eq!(summary["work_life_ratio"]["value"], 2.0);
}

#[test]
fn test_prefs_init_then_show_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    let path_str = path.to_str().unwrap();

    let (_, _, code) = run_cli(&["prefs", "init", path_str]);
    assert_eq!(code, 0, "prefs init failed");
    assert!(path.exists());

    let (stdout, _, code) = run_cli(&["prefs", "show", "--path", path_str, "--json"]);
    assert_eq!(code, 0, "prefs show failed");
    let prefs: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(prefs["max_meetings_per_day"], 5);
    assert_eq!(prefs["no_zone_times"].as_array().unwrap().len(), 2);
}

#[test]
fn test_prefs_show_rejects_invalid_file() {
    let mut prefs_file = tempfile::NamedTempFile::new().unwrap();
    write!(prefs_file, "max_meetings_per_day = 0").unwrap();

    let (_, stderr, code) = run_cli(&["prefs", "show", "--path", prefs_file.path().to_str().unwrap()]);
    assert_ne!(code, 0, "invalid preferences should be rejected");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_nozone_list_shows_default_rules() {
    let (stdout, _, code) = run_cli(&["nozone", "list"]);
    assert_eq!(code, 0, "nozone list failed");
    assert!(stdout.contains("Mon"));
    assert!(stdout.contains("Fri"));
}

#[test]
fn test_nozone_expand_json_has_eight_week_horizon() {
    let (stdout, _, code) = run_cli(&["nozone", "expand", "--json"]);
    assert_eq!(code, 0, "nozone expand failed");

    let events: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let events = events.as_array().expect("expected an array");
    // Two default recurring rules, eight weeks each.
    assert_eq!(events.len(), 16);
    assert!(events
        .iter()
        .all(|e| e["type"] == "no-zone" && e["title"] == "No-Zone Time (Protected)"));
    assert!(events
        .iter()
        .any(|e| e["id"].as_str().unwrap() == "no-zone-1-week-7"));
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("hermony-cli"));
}
