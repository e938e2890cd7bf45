//! Scaffolding CLI subcommands (`mcpgen new ...`).
//!
//! Provides commands to:
//! - `agent`: Write a new agent manifest
//! - `plugin`: Write a new plugin manifest
//! - `schema`: Write a new schema template

use anyhow::Result;
use clap::Subcommand;
use dialoguer::Input;

use crate::core::Telemetry;
use crate::scaffold;

/// Scaffolding subcommands
#[derive(Subcommand, Debug)]
pub enum NewCommands {
    /// Create an agent manifest
    Agent {
        /// Agent name (prompted for if omitted)
        name: Option<String>,
    },

    /// Create a plugin manifest
    Plugin {
        /// Plugin name (prompted for if omitted)
        name: Option<String>,
    },

    /// Create a schema template
    Schema {
        /// Schema name (prompted for if omitted)
        name: Option<String>,
    },
}

/// Scaffold a new agent manifest
pub async fn execute_agent(name: Option<String>) -> Result<()> {
    let name = resolve_name(name, "Agent name")?;
    let path = scaffold::create_agent(&crate::config::agents_dir()?, &name).await?;

    println!("✅ Created agent config: {}", path.display());
    Telemetry::open()?
        .log(format!("scaffolded_agent:{}", name))
        .await
}

/// Scaffold a new plugin manifest
pub async fn execute_plugin(name: Option<String>) -> Result<()> {
    let name = resolve_name(name, "Plugin name")?;
    let path = scaffold::create_plugin(&crate::config::plugins_dir()?, &name).await?;

    println!("✅ Created plugin: {}", path.display());
    Telemetry::open()?
        .log(format!("scaffolded_plugin:{}", name))
        .await
}

/// Scaffold a new schema template
pub async fn execute_schema(name: Option<String>) -> Result<()> {
    let name = resolve_name(name, "Schema name")?;
    let path = scaffold::create_schema(&crate::config::schemas_dir()?, &name).await?;

    println!("✅ Created schema: {}", path.display());
    Telemetry::open()?
        .log(format!("scaffolded_schema:{}", name))
        .await
}

/// Use the given name, or prompt for one interactively
fn resolve_name(name: Option<String>, prompt: &str) -> Result<String> {
    match name {
        Some(name) => Ok(name),
        None => {
            let name: String = Input::new().with_prompt(prompt).interact_text()?;
            Ok(name)
        }
    }
}
