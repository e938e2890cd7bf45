//! Generators for new agent, plugin, and schema manifests.
//!
//! Each generator validates the requested name, writes a pretty-printed
//! JSON manifest under the configured directory, and returns the path it
//! wrote.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::domain::{AgentManifest, PluginManifest, SchemaTemplate};

/// Rejected scaffold names.
///
/// Names become file and directory names, so they must be non-empty and
/// free of path separators or other surprising characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NameError {
    #[error("name cannot be empty")]
    Empty,

    #[error("name contains unsupported character: {0:?}")]
    UnsupportedChar(char),
}

/// Check that a name is usable as a manifest file/directory name.
///
/// Allowed: ASCII alphanumerics, `-` and `_`.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(NameError::UnsupportedChar(bad));
    }

    Ok(())
}

/// Write an agent manifest to `<agents_dir>/<name>.json`.
pub async fn create_agent(agents_dir: &Path, name: &str) -> Result<PathBuf> {
    validate_name(name)?;

    let manifest = AgentManifest::new(name);
    let path = agents_dir.join(format!("{}.json", name));
    write_manifest(&path, &manifest).await?;

    info!(agent = %name, path = %path.display(), "agent manifest created");
    Ok(path)
}

/// Write a plugin manifest to `<plugins_dir>/<name>/plugin.json`.
pub async fn create_plugin(plugins_dir: &Path, name: &str) -> Result<PathBuf> {
    validate_name(name)?;

    let manifest = PluginManifest::new(name);
    let path = plugins_dir.join(name).join("plugin.json");
    write_manifest(&path, &manifest).await?;

    info!(plugin = %name, path = %path.display(), "plugin manifest created");
    Ok(path)
}

/// Write an empty schema template to `<schemas_dir>/<name>.json`.
pub async fn create_schema(schemas_dir: &Path, name: &str) -> Result<PathBuf> {
    validate_name(name)?;

    let template = SchemaTemplate::new(name);
    let path = schemas_dir.join(format!("{}.json", name));
    write_manifest(&path, &template).await?;

    info!(schema = %name, path = %path.display(), "schema template created");
    Ok(path)
}

/// Serialize a manifest as pretty JSON, creating parent directories.
async fn write_manifest<T: Serialize>(path: &Path, manifest: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(manifest)?;
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    Ok(())
}
