//! Core logic.
//!
//! This module contains:
//! - Schema: composable validation pipelines
//! - AgentManager: in-memory running-agent bookkeeping
//! - Registry: manifest registry with directory discovery
//! - Telemetry: persisted event log

pub mod agents;
pub mod registry;
pub mod schema;
pub mod telemetry;

// Re-export commonly used types
pub use agents::AgentManager;
pub use registry::Registry;
pub use schema::Schema;
pub use telemetry::Telemetry;
