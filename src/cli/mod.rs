//! Command-line interface for mcpgen.
//!
//! Provides commands for managing running agents, validating values
//! against the sample schema, reviewing telemetry, and scaffolding new
//! manifests.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::{AgentManager, Registry, Schema, Telemetry};

pub mod scaffold;

/// mcpgen - scaffolding and validation toolkit for MCP agent projects
#[derive(Parser, Debug)]
#[command(name = "mcpgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage running agents
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },

    /// Validate values against the sample schema
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },

    /// Review recorded telemetry events
    Trending {
        #[command(subcommand)]
        command: TrendingCommands,
    },

    /// Scaffold a new agent, plugin, or schema
    New {
        #[command(subcommand)]
        command: scaffold::NewCommands,
    },

    /// Inspect plugin manifests
    Plugin {
        #[command(subcommand)]
        command: PluginCommands,
    },

    /// Show resolved configuration (debug)
    Config,
}

#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// Start an MCP agent
    Start {
        /// Agent name
        name: String,
    },

    /// List all running agents
    List,

    /// Stop an MCP agent
    Stop {
        /// Agent name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommands {
    /// Validate input using the sample schema
    Validate {
        /// Value to validate
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TrendingCommands {
    /// Show trending events
    Show {
        /// Window in days (defaults to the configured window)
        #[arg(short, long)]
        days: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PluginCommands {
    /// List discovered plugin manifests
    List,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Agent { command } => match command {
                AgentCommands::Start { name } => start_agent(&name).await,
                AgentCommands::List => list_agents(),
                AgentCommands::Stop { name } => stop_agent(&name).await,
            },
            Commands::Schema { command } => match command {
                SchemaCommands::Validate { value } => validate_value(&value),
            },
            Commands::Trending { command } => match command {
                TrendingCommands::Show { days } => show_trending(days).await,
            },
            Commands::New { command } => match command {
                scaffold::NewCommands::Agent { name } => scaffold::execute_agent(name).await,
                scaffold::NewCommands::Plugin { name } => scaffold::execute_plugin(name).await,
                scaffold::NewCommands::Schema { name } => scaffold::execute_schema(name).await,
            },
            Commands::Plugin { command } => match command {
                PluginCommands::List => list_plugins().await,
            },
            Commands::Config => show_config(),
        }
    }
}

/// Start tracking an agent and record the event
async fn start_agent(name: &str) -> Result<()> {
    let mut manager = AgentManager::new();

    if manager.start(name) {
        println!("🔄 Starting MCP agent: {}", name);
        Telemetry::open()?
            .log(format!("agent_started:{}", name))
            .await?;
    } else {
        println!("⚠️ Agent already running: {}", name);
    }

    Ok(())
}

/// List running agents in start order
fn list_agents() -> Result<()> {
    let manager = AgentManager::new();
    let agents = manager.list();

    if agents.is_empty() {
        println!("No agents running");
        return Ok(());
    }

    for agent in agents {
        println!("- {}", agent);
    }

    Ok(())
}

/// Stop tracking an agent and record the event
async fn stop_agent(name: &str) -> Result<()> {
    let mut manager = AgentManager::new();

    if manager.stop(name) {
        println!("🛑 Stopping MCP agent: {}", name);
        Telemetry::open()?
            .log(format!("agent_stopped:{}", name))
            .await?;
    } else {
        println!("⚠️ Agent not running: {}", name);
    }

    Ok(())
}

/// Build the sample validation schema: trim, then require non-empty
fn sample_schema() -> Schema<String> {
    let mut schema = Schema::new();
    schema
        .transform(|v: String| v.trim().to_string())
        .assert_that(|v| !v.is_empty());
    schema
}

/// Validate a value against the sample schema
fn validate_value(value: &str) -> Result<()> {
    let schema = sample_schema();

    if schema.validate(value.to_string()) {
        println!("✅ Valid");
    } else {
        println!("❌ Invalid");
    }

    Ok(())
}

/// Show telemetry events inside the trending window
async fn show_trending(days: Option<u32>) -> Result<()> {
    let days = match days {
        Some(days) => days,
        None => crate::config::config()?.trending.window_days,
    };

    let telemetry = Telemetry::open()?;
    let events = telemetry.recent(days).await?;

    println!("📊 Trending events:");
    if events.is_empty() {
        println!("  (none in the last {} days)", days);
        return Ok(());
    }

    for event in events {
        println!("- {}: {}", event.time.to_rfc3339(), event.event);
    }

    Ok(())
}

/// List discovered plugin manifests
async fn list_plugins() -> Result<()> {
    let cfg = crate::config::config()?;
    let registry = Registry::discover(&cfg.agents_dir, &cfg.plugins_dir).await?;
    let plugins = registry.list_plugins();

    if plugins.is_empty() {
        println!(
            "No plugins found. Use 'mcpgen new plugin <name>' to scaffold one."
        );
        return Ok(());
    }

    println!("{:<20} {:<30} {:<8}", "NAME", "ENTRYPOINT", "ENABLED");
    println!("{}", "-".repeat(60));

    for plugin in plugins {
        println!(
            "{:<20} {:<30} {:<8}",
            plugin.name, plugin.entrypoint, plugin.enabled
        );
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = crate::config::config()?;

    println!("mcpgen configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Root:      {}", cfg.root.display());
    println!("  Home:      {}", cfg.home.display());
    println!("  Telemetry: {}", cfg.home.join("telemetry.json").display());
    println!("  Agents:    {}", cfg.agents_dir.display());
    println!("  Plugins:   {}", cfg.plugins_dir.display());
    println!("  Schemas:   {}", cfg.schemas_dir.display());
    println!();
    println!("Trending:");
    println!("  Window: {} days", cfg.trending.window_days);

    Ok(())
}
