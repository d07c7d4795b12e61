//! Integration tests for the CLI interface
//!
//! Runs the built binary against fixture files in a temporary directory

mod common;

use assert_cmd::Command;
use common::{policy_csv, Fixtures};
use predicates::prelude::*;

fn cli(fixtures: &Fixtures) -> Command {
    let mut cmd = Command::cargo_bin("agent-licensing").unwrap();
    cmd.current_dir(fixtures.path(""))
        .env_remove("RUST_LOG")
        .env_remove("AGENT_LICENSING_REFERENCE_PATH");
    cmd
}

fn sample_upload(fixtures: &Fixtures) -> std::path::PathBuf {
    fixtures.write(
        "policies.csv",
        &policy_csv(&[
            "P1,WA,GRANT CROUCH,66061310,2024-03-01",
            "P2,NY,GRANT CROUCH,66061310,2024-03-02",
            "P3,WA,,66061310,2024-03-03",
        ]),
    )
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("agent-licensing").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("expiring"));
}

#[test]
fn test_missing_subcommand() {
    let mut cmd = Command::cargo_bin("agent-licensing").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_validate_report() {
    let fixtures = Fixtures::new();
    let upload = sample_upload(&fixtures);
    let reference = fixtures.write_reference();

    cli(&fixtures)
        .arg("validate")
        .arg(&upload)
        .arg("--reference")
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total policies:    3"))
        .stdout(predicate::str::contains("Licensed agents:   1 (33%)"))
        .stdout(predicate::str::contains("Incomplete data:   1"))
        .stdout(predicate::str::contains("Request appointment"));
}

#[test]
fn test_validate_json_view() {
    let fixtures = Fixtures::new();
    let upload = sample_upload(&fixtures);
    let reference = fixtures.write_reference();

    let output = cli(&fixtures)
        .args(["validate", "--json", "--view", "licensed", "-r"])
        .arg(&reference)
        .arg(&upload)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["needsAppointment"], 2);
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    assert_eq!(json["results"][0]["policyNumber"], "P1");
}

#[test]
fn test_validate_rejects_wrong_extension() {
    let fixtures = Fixtures::new();
    let upload = fixtures.write("policies.txt", &policy_csv(&[]));

    cli(&fixtures)
        .arg("validate")
        .arg(&upload)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("expected one of: csv"))
        .stderr(predicate::str::contains(
            "[E2002] Uploaded file has an unsupported extension",
        ));
}

#[test]
fn test_validate_missing_reference_file() {
    let fixtures = Fixtures::new();
    let upload = sample_upload(&fixtures);

    cli(&fixtures)
        .arg("validate")
        .arg(&upload)
        .arg("--reference")
        .arg(fixtures.path("missing.json"))
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_export_to_file() {
    let fixtures = Fixtures::new();
    let upload = sample_upload(&fixtures);
    let reference = fixtures.write_reference();
    let output = fixtures.path("results.csv");

    cli(&fixtures)
        .arg("export")
        .arg(&upload)
        .arg("-r")
        .arg(&reference)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Policy Number,Agent Name,Agent ID"));
    assert_eq!(
        lines[1],
        "P1,GRANT CROUCH,66061310,WA,Yes,Active,2025-12-31,No,2024-03-01"
    );
    assert_eq!(
        lines[3],
        "P3,,66061310,WA,No,Incomplete Data,N/A,Yes,2024-03-03"
    );
}

#[test]
fn test_expiring_report() {
    let fixtures = Fixtures::new();
    let reference = fixtures.write_reference();

    cli(&fixtures)
        .args(["expiring", "--days", "30", "--as-of", "2025-12-15", "-r"])
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "GRANT CROUCH (66061310) WA Active expires 2025-12-31 - 16 day(s) remaining",
        ))
        .stdout(predicate::str::contains("EMILY DAVIS").not());
}

#[test]
fn test_expiring_report_empty_window() {
    let fixtures = Fixtures::new();
    let reference = fixtures.write_reference();

    cli(&fixtures)
        .args(["expiring", "--as-of", "2030-01-01", "-r"])
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::contains("No licenses expire within 30 days"));
}

#[test]
fn test_invalid_config_file() {
    let fixtures = Fixtures::new();
    let config = fixtures.write("bad.toml", "expiring_days = \"soon\"");

    cli(&fixtures)
        .arg("-c")
        .arg(&config)
        .args(["expiring", "--as-of", "2025-12-15"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_expiring_rejects_zero_days() {
    let fixtures = Fixtures::new();

    cli(&fixtures)
        .args(["expiring", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--days"));
}

#[test]
fn test_expiring_unbounded_window() {
    let fixtures = Fixtures::new();
    let reference = fixtures.write_reference();

    cli(&fixtures)
        .args(["expiring", "--days", "4294967295", "--as-of", "2024-01-01", "-r"])
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::contains("EMILY DAVIS"))
        .stdout(predicate::str::contains("GRANT CROUCH"));
}
