//! In-memory registry of plugin and agent manifests.
//!
//! The registry is transient: it is rebuilt per invocation, either by
//! registering manifests directly or by scanning the manifest directories
//! on disk (`discover`).

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::{AgentManifest, PluginManifest};

/// Holds the manifests known to this process, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    plugins: Vec<PluginManifest>,
    agents: Vec<AgentManifest>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by scanning the manifest directories.
    ///
    /// Agent manifests are `<agents_dir>/*.json`; plugin manifests are
    /// `<plugins_dir>/<name>/plugin.json`. Files that fail to parse are
    /// skipped with a warning rather than aborting the scan.
    pub async fn discover(agents_dir: &Path, plugins_dir: &Path) -> Result<Self> {
        let mut registry = Self::new();

        if agents_dir.exists() {
            let mut entries = fs::read_dir(agents_dir)
                .await
                .with_context(|| format!("Failed to read directory: {}", agents_dir.display()))?;

            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                match read_manifest::<AgentManifest>(&path).await {
                    Ok(manifest) => registry.register_agent(manifest),
                    Err(e) => warn!(path = %path.display(), "skipping agent manifest: {e:#}"),
                }
            }
        }

        if plugins_dir.exists() {
            let mut entries = fs::read_dir(plugins_dir)
                .await
                .with_context(|| format!("Failed to read directory: {}", plugins_dir.display()))?;

            while let Some(entry) = entries.next_entry().await? {
                let manifest_path = entry.path().join("plugin.json");
                if !manifest_path.exists() {
                    continue;
                }
                match read_manifest::<PluginManifest>(&manifest_path).await {
                    Ok(manifest) => registry.register_plugin(manifest),
                    Err(e) => warn!(path = %manifest_path.display(), "skipping plugin manifest: {e:#}"),
                }
            }
        }

        Ok(registry)
    }

    /// Register a plugin manifest, replacing any existing one of the same
    /// name.
    pub fn register_plugin(&mut self, manifest: PluginManifest) {
        debug!(plugin = %manifest.name, "plugin registered");
        if let Some(existing) = self.plugins.iter_mut().find(|p| p.name == manifest.name) {
            *existing = manifest;
        } else {
            self.plugins.push(manifest);
        }
    }

    /// Register an agent manifest, replacing any existing one of the same
    /// name.
    pub fn register_agent(&mut self, manifest: AgentManifest) {
        debug!(agent = %manifest.name, "agent registered");
        if let Some(existing) = self.agents.iter_mut().find(|a| a.name == manifest.name) {
            *existing = manifest;
        } else {
            self.agents.push(manifest);
        }
    }

    /// Registered plugins, in registration order.
    pub fn list_plugins(&self) -> &[PluginManifest] {
        &self.plugins
    }

    /// Registered agents, in registration order.
    pub fn list_agents(&self) -> &[AgentManifest] {
        &self.agents
    }

    /// Look up a plugin by name.
    pub fn get_plugin(&self, name: &str) -> Option<&PluginManifest> {
        self.plugins.iter().find(|p| p.name == name)
    }

    /// Look up an agent by name.
    pub fn get_agent(&self, name: &str) -> Option<&AgentManifest> {
        self.agents.iter().find(|a| a.name == name)
    }
}

/// Read and parse a JSON manifest file.
async fn read_manifest<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse manifest: {}", path.display()))
}
