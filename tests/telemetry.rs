//! Telemetry Integration Tests
//!
//! Tests for the persisted event log: append, windowed queries, and the
//! on-disk document format.

use mcpgen::Telemetry;
use tempfile::TempDir;

#[tokio::test]
async fn test_log_and_recent_events() {
    let temp = TempDir::new().unwrap();
    let telemetry = Telemetry::at(temp.path().join("telemetry.json"));

    telemetry.log("test_event").await.unwrap();

    let recent = telemetry.recent(1).await.unwrap();
    assert!(recent.iter().any(|e| e.event == "test_event"));
}

#[tokio::test]
async fn test_document_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("telemetry.json");

    Telemetry::at(&path).log("first").await.unwrap();
    Telemetry::at(&path).log("second").await.unwrap();

    let events = Telemetry::at(&path).recent(7).await.unwrap();
    let labels: Vec<&str> = events.iter().map(|e| e.event.as_str()).collect();
    assert_eq!(labels, ["first", "second"]);
}

#[tokio::test]
async fn test_on_disk_document_shape() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("telemetry.json");

    Telemetry::at(&path).log("probe").await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let events = json.get("events").unwrap().as_array().unwrap();
    assert_eq!(events[0].get("event").unwrap(), "probe");
    // ISO-8601 timestamp string
    let time = events[0].get("time").unwrap().as_str().unwrap();
    assert!(time.contains('T'));
}
