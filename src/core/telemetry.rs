//! Persisted telemetry event log.
//!
//! Events are stored in a single JSON document
//! (`$MCPGEN_HOME/telemetry.json`) so the file stays trivially
//! inspectable. Appends are read-modify-write over the whole document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use tokio::fs;

use crate::domain::{TelemetryEvent, TelemetryLog};

/// Handle to the on-disk telemetry document.
pub struct Telemetry {
    path: PathBuf,
}

impl Telemetry {
    /// Open the telemetry log at the configured location.
    pub fn open() -> Result<Self> {
        Ok(Self::at(crate::config::telemetry_path()?))
    }

    /// Open a telemetry log backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an event stamped with the current UTC time.
    pub async fn log(&self, event: impl Into<String>) -> Result<()> {
        let mut log = self.read().await?;
        log.events.push(TelemetryEvent::now(event));
        self.write(&log).await
    }

    /// Events newer than `now - window_days`, in append order.
    pub async fn recent(&self, window_days: u32) -> Result<Vec<TelemetryEvent>> {
        let cutoff = Utc::now() - Duration::days(i64::from(window_days));
        let log = self.read().await?;

        Ok(log
            .events
            .into_iter()
            .filter(|e| e.time > cutoff)
            .collect())
    }

    /// Read the whole document; a missing file is an empty log.
    async fn read(&self) -> Result<TelemetryLog> {
        if !self.path.exists() {
            return Ok(TelemetryLog::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read telemetry: {}", self.path.display()))?;

        serde_json::from_str(&content).context("Failed to parse telemetry JSON")
    }

    /// Write the whole document, creating parent directories as needed.
    async fn write(&self, log: &TelemetryLog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write telemetry: {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_telemetry() -> (Telemetry, TempDir) {
        let temp = TempDir::new().unwrap();
        let telemetry = Telemetry::at(temp.path().join("telemetry.json"));
        (telemetry, temp)
    }

    #[tokio::test]
    async fn test_log_and_recent() {
        let (telemetry, _temp) = test_telemetry();

        telemetry.log("test_event").await.unwrap();

        let recent = telemetry.recent(1).await.unwrap();
        assert!(recent.iter().any(|e| e.event == "test_event"));
    }

    #[tokio::test]
    async fn test_recent_on_missing_file_is_empty() {
        let (telemetry, _temp) = test_telemetry();

        let recent = telemetry.recent(7).await.unwrap();
        assert!(recent.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let (telemetry, _temp) = test_telemetry();

        telemetry.log("first").await.unwrap();
        telemetry.log("second").await.unwrap();
        telemetry.log("third").await.unwrap();

        let events = telemetry.recent(1).await.unwrap();
        let labels: Vec<&str> = events.iter().map(|e| e.event.as_str()).collect();
        assert_eq!(labels, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_recent_filters_old_events() {
        let (telemetry, _temp) = test_telemetry();

        // Write a document with one stale and one fresh event
        let stale = TelemetryEvent {
            event: "stale".to_string(),
            time: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        };
        let log = TelemetryLog {
            events: vec![stale, TelemetryEvent::now("fresh")],
        };
        telemetry.write(&log).await.unwrap();

        let recent = telemetry.recent(7).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].event, "fresh");
    }

    #[tokio::test]
    async fn test_document_shape_on_disk() {
        let (telemetry, _temp) = test_telemetry();

        telemetry.log("shape_check").await.unwrap();

        let raw = tokio::fs::read_to_string(telemetry.path()).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let events = json.get("events").unwrap().as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get("event").unwrap(), "shape_check");
        assert!(events[0].get("time").unwrap().is_string());
    }
}
