//! Manifest files written by the scaffolding commands.
//!
//! Each manifest is a small pretty-printed JSON file that downstream
//! tooling (and the in-memory [`Registry`](crate::core::Registry)) reads
//! back by name.

use serde::{Deserialize, Serialize};

/// Manifest for a scaffolded agent (`<agents_dir>/<name>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentManifest {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl AgentManifest {
    /// Create the default manifest for a new agent.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("Agent for {}", name);
        Self {
            name,
            version: "0.1.0".to_string(),
            description,
        }
    }
}

/// Manifest for a scaffolded plugin (`<plugins_dir>/<name>/plugin.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,

    /// Dotted module path the plugin host loads.
    pub entrypoint: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl PluginManifest {
    /// Create the default manifest for a new plugin.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let entrypoint = format!("plugins.{}.main", name);
        Self {
            name,
            entrypoint,
            enabled: true,
        }
    }
}

/// Starter template for a schema definition (`<schemas_dir>/<name>.json`).
///
/// Step lists start empty; users fill in the names of the transforms and
/// assertions their pipeline should apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaTemplate {
    pub name: String,

    #[serde(default)]
    pub transforms: Vec<String>,

    #[serde(default)]
    pub assertions: Vec<String>,
}

impl SchemaTemplate {
    /// Create an empty template for a new schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transforms: Vec::new(),
            assertions: Vec::new(),
        }
    }
}
