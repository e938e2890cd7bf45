//! mcpgen - scaffolding and validation toolkit for MCP agent projects
//!
//! A small developer tool that manages named agents, validates values
//! against composable schema pipelines, records telemetry events, and
//! scaffolds manifest files for new agents, plugins, and schemas.
//!
//! # Architecture
//!
//! - Schemas are ordered transform/assertion chains with a binary
//!   pass/fail contract
//! - Telemetry is a single JSON document appended to on every recorded
//!   event
//! - Agent bookkeeping is in-memory and per-process
//!
//! # Modules
//!
//! - `core`: Schema engine, agent manager, registry, telemetry
//! - `domain`: Data structures (TelemetryEvent, manifests)
//! - `scaffold`: Manifest generators
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Validate a value against the sample schema
//! mcpgen schema validate "  hello  "
//!
//! # Track an agent and review recent events
//! mcpgen agent start crawler
//! mcpgen trending show
//!
//! # Scaffold a new plugin manifest
//! mcpgen new plugin notify
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod scaffold;

// Re-export main types at crate root for convenience
pub use core::{AgentManager, Registry, Schema, Telemetry};
pub use domain::{AgentManifest, PluginManifest, SchemaTemplate, TelemetryEvent};
