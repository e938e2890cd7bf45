//! Configuration for mcpgen paths.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (MCPGEN_HOME)
//! 2. Config file (.mcp/config.yaml)
//! 3. Defaults (.mcp under the current directory)
//!
//! Config file discovery:
//! - Searches current directory and parents for .mcp/config.yaml
//! - Paths in the config file are relative to the project root (the
//!   parent of the .mcp directory)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub trending: Option<TrendingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Agent manifest directory (relative to project root)
    pub agents: Option<String>,
    /// Plugin directory (relative to project root)
    pub plugins: Option<String>,
    /// Schema template directory (relative to project root)
    pub schemas: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingConfig {
    pub window_days: Option<u32>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Project root (parent of the .mcp directory, or the current dir)
    pub root: PathBuf,
    /// Tool state directory (.mcp); holds telemetry.json
    pub home: PathBuf,
    /// Where agent manifests are written
    pub agents_dir: PathBuf,
    /// Where plugin manifests are written
    pub plugins_dir: PathBuf,
    /// Where schema templates are written
    pub schemas_dir: PathBuf,
    /// Default window for `trending show`
    pub trending: TrendingSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct TrendingSettings {
    pub window_days: u32,
}

impl Default for TrendingSettings {
    fn default() -> Self {
        Self { window_days: 7 }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".mcp").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(root: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    let config_file = find_config_file();

    // Project root: parent of .mcp/ when a config file was found,
    // otherwise the current directory.
    let root = config_file
        .as_ref()
        .and_then(|p| p.parent()) // .mcp/
        .and_then(|p| p.parent()) // project root
        .map(Path::to_path_buf)
        .unwrap_or(cwd);

    let home = if let Ok(env_home) = std::env::var("MCPGEN_HOME") {
        PathBuf::from(env_home)
    } else {
        root.join(".mcp")
    };

    let (paths, trending) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;
        let trending = TrendingSettings {
            window_days: config
                .trending
                .as_ref()
                .and_then(|t| t.window_days)
                .unwrap_or(7),
        };
        (config.paths, trending)
    } else {
        (PathsConfig::default(), TrendingSettings::default())
    };

    let agents_dir = resolve_path(&root, paths.agents.as_deref().unwrap_or("data/agents"));
    let plugins_dir = resolve_path(&root, paths.plugins.as_deref().unwrap_or("plugins"));
    let schemas_dir = resolve_path(&root, paths.schemas.as_deref().unwrap_or("data/schemas"));

    Ok(ResolvedConfig {
        root,
        home,
        agents_dir,
        plugins_dir,
        schemas_dir,
        trending,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Get the telemetry document path ($MCPGEN_HOME/telemetry.json)
pub fn telemetry_path() -> Result<PathBuf> {
    Ok(config()?.home.join("telemetry.json"))
}

/// Get the agent manifest directory
pub fn agents_dir() -> Result<PathBuf> {
    Ok(config()?.agents_dir.clone())
}

/// Get the plugin directory
pub fn plugins_dir() -> Result<PathBuf> {
    Ok(config()?.plugins_dir.clone())
}

/// Get the schema template directory
pub fn schemas_dir() -> Result<PathBuf> {
    Ok(config()?.schemas_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let mcp_dir = temp.path().join(".mcp");
        std::fs::create_dir_all(&mcp_dir).unwrap();

        let config_path = mcp_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  agents: generated/agents
  plugins: extensions
trending:
  window_days: 14
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.agents, Some("generated/agents".to_string()));
        assert_eq!(config.paths.plugins, Some("extensions".to_string()));
        assert_eq!(config.paths.schemas, None);
        assert_eq!(config.trending.unwrap().window_days, Some(14));
    }

    #[test]
    fn test_resolve_relative_path() {
        let root = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&root, "data/agents"),
            PathBuf::from("/home/user/project/data/agents")
        );
        assert_eq!(
            resolve_path(&root, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }

    #[test]
    fn test_trending_settings_default() {
        assert_eq!(TrendingSettings::default().window_days, 7);
    }
}
