//! CLI Integration Tests
//!
//! Binary-level tests: argument parsing, the sample schema command, and
//! telemetry wiring across invocations.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Build a command running in an isolated project directory.
fn mcpgen(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mcpgen").unwrap();
    cmd.current_dir(project.path())
        .env("MCPGEN_HOME", project.path().join(".mcp"));
    cmd
}

#[test]
fn test_help() {
    let project = TempDir::new().unwrap();
    mcpgen(&project)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "validation toolkit for MCP agent projects",
        ));
}

#[test]
fn test_invalid_subcommand() {
    let project = TempDir::new().unwrap();
    mcpgen(&project)
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_schema_validate_accepts_trimmed_non_empty() {
    let project = TempDir::new().unwrap();
    mcpgen(&project)
        .args(["schema", "validate", "  hello  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Valid"));
}

#[test]
fn test_schema_validate_rejects_whitespace_only() {
    let project = TempDir::new().unwrap();
    mcpgen(&project)
        .args(["schema", "validate", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Invalid"));
}

#[test]
fn test_agent_start_records_telemetry() {
    let project = TempDir::new().unwrap();

    mcpgen(&project)
        .args(["agent", "start", "crawler"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting MCP agent: crawler"));

    mcpgen(&project)
        .args(["trending", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agent_started:crawler"));
}

#[test]
fn test_trending_show_with_empty_log() {
    let project = TempDir::new().unwrap();
    mcpgen(&project)
        .args(["trending", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trending events"));
}

#[test]
fn test_scaffold_then_list_plugins() {
    let project = TempDir::new().unwrap();

    mcpgen(&project)
        .args(["new", "plugin", "notify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plugin"));

    assert!(project.path().join("plugins/notify/plugin.json").exists());

    mcpgen(&project)
        .args(["plugin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notify"))
        .stdout(predicate::str::contains("plugins.notify.main"));
}

#[test]
fn test_scaffold_agent_writes_manifest() {
    let project = TempDir::new().unwrap();

    mcpgen(&project)
        .args(["new", "agent", "crawler"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created agent config"));

    let manifest = project.path().join("data/agents/crawler.json");
    assert!(manifest.exists());

    let raw = std::fs::read_to_string(&manifest).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json.get("name").unwrap(), "crawler");
    assert_eq!(json.get("version").unwrap(), "0.1.0");
}

#[test]
fn test_scaffold_rejects_invalid_name() {
    let project = TempDir::new().unwrap();
    mcpgen(&project)
        .args(["new", "agent", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported character"));
}
