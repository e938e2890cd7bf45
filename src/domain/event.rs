//! Telemetry event types.
//!
//! Events are persisted as a single JSON document:
//! `{"events": [{"event": "...", "time": "..."}, ...]}` with RFC 3339
//! UTC timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// Free-form event label (e.g. `agent_started:crawler`)
    pub event: String,

    /// When the event was recorded (UTC)
    pub time: DateTime<Utc>,
}

impl TelemetryEvent {
    /// Create an event stamped with the current UTC time.
    pub fn now(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            time: Utc::now(),
        }
    }
}

/// The on-disk telemetry document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryLog {
    /// All recorded events, in append order.
    #[serde(default)]
    pub events: Vec<TelemetryEvent>,
}
