/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use common::{SessionContentBuilder, SessionDirBuilder, stats_file_name};
use predicates::prelude::*;

fn exporter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_aim-session-exporter"))
}

#[test]
fn test_cli_export_to_output_file() {
    let dir = SessionDirBuilder::new()
        .with_default_session(&stats_file_name("Tile Frenzy", "2024.03.02-09.01.02"))
        .build();
    let output = dir.path().join("payload.jsonl");

    exporter()
        .arg("export")
        .arg("--dir")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("--keep")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload written to"));

    let payload = fs::read_to_string(&output).unwrap();
    assert!(payload.ends_with("\r\n"));
    assert!(payload.contains("\"session_hash\""));
}

#[test]
fn test_cli_export_archives_parsed_files() {
    let name = stats_file_name("Tile Frenzy", "2024.03.02-09.01.02");
    let dir = SessionDirBuilder::new().with_default_session(&name).build();
    let output = dir.path().join("payload.jsonl");

    exporter()
        .arg("export")
        .arg("--dir")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(!dir.path().join(&name).exists());
    assert!(dir.path().join("processed").join(&name).exists());
}

#[test]
fn test_cli_export_keep_leaves_sources_in_place() {
    let name = stats_file_name("Tile Frenzy", "2024.03.02-09.01.02");
    let dir = SessionDirBuilder::new().with_default_session(&name).build();

    exporter()
        .arg("export")
        .arg("--dir")
        .arg(dir.path())
        .arg("--output")
        .arg(dir.path().join("payload.jsonl"))
        .arg("--keep")
        .assert()
        .success();

    assert!(dir.path().join(&name).exists());
    assert!(!dir.path().join("processed").exists());
}

#[test]
fn test_cli_export_stores_object_in_configured_bucket() {
    let dir = SessionDirBuilder::new()
        .with_default_session(&stats_file_name("Tile Frenzy", "2024.03.02-09.01.02"))
        .with_config("session-bucket")
        .build();

    exporter()
        .arg("export")
        .arg("--dir")
        .arg(dir.path())
        .arg("--keep")
        .assert()
        .success()
        .stdout(predicate::str::contains("bucket 'session-bucket'"));

    let bucket = dir.path().join("session-bucket");
    let objects: Vec<_> = fs::read_dir(&bucket).unwrap().collect();
    assert_eq!(objects.len(), 1);
}

#[test]
fn test_cli_export_without_config_or_output_fails() {
    let dir = SessionDirBuilder::new()
        .with_default_session(&stats_file_name("Tile Frenzy", "2024.03.02-09.01.02"))
        .build();

    exporter()
        .arg("export")
        .arg("--dir")
        .arg(dir.path())
        .arg("--keep")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_cli_export_aborts_on_structural_failure() {
    let dir = SessionDirBuilder::new()
        .with_session(
            &stats_file_name("Tile Frenzy", "2024.03.02-09.01.02"),
            "two\r\n\r\nsections only",
        )
        .build();

    exporter()
        .arg("export")
        .arg("--dir")
        .arg(dir.path())
        .arg("--output")
        .arg(dir.path().join("payload.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 4 sections, found 2"));

    assert!(!dir.path().join("payload.jsonl").exists());
}

#[test]
fn test_cli_export_warns_but_succeeds_on_corrupt_section() {
    let content = SessionContentBuilder::new()
        .with_general("Input Lag:,broken\r\nFOV:,103")
        .build();
    let dir = SessionDirBuilder::new()
        .with_session(&stats_file_name("Tile Frenzy", "2024.03.02-09.01.02"), &content)
        .build();

    exporter()
        .arg("export")
        .arg("--dir")
        .arg(dir.path())
        .arg("--output")
        .arg(dir.path().join("payload.jsonl"))
        .arg("--keep")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: dropping general settings section"));
}

#[test]
fn test_cli_stats_command() {
    let dir = SessionDirBuilder::new()
        .with_session(
            &stats_file_name("Tile Frenzy", "2024.03.02-09.01.02"),
            &SessionContentBuilder::new().with_kill_count(4).build(),
        )
        .with_session(
            &stats_file_name("1wall 6targets small", "2023.01.15-14.05.30"),
            &SessionContentBuilder::new().with_kill_count(2).build(),
        )
        .build();

    exporter()
        .arg("stats")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Session Export Statistics"))
        .stdout(predicate::str::contains("Session files: 2"))
        .stdout(predicate::str::contains("Total kills: 6"))
        .stdout(predicate::str::contains("Oldest session: 2023-01-15 14:05:30"))
        .stdout(predicate::str::contains("Newest session: 2024-03-02 09:01:02"));
}

#[test]
fn test_cli_stats_leaves_files_in_place() {
    let name = stats_file_name("Tile Frenzy", "2024.03.02-09.01.02");
    let dir = SessionDirBuilder::new().with_default_session(&name).build();

    exporter().arg("stats").arg("--dir").arg(dir.path()).assert().success();
    assert!(dir.path().join(&name).exists());
}

#[test]
fn test_cli_no_command_shows_help_message() {
    exporter()
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    exporter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export aim-trainer session logs"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("stats"));
}
