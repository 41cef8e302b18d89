//! CLI command definitions.

pub mod health;
pub mod todos;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for todosync API.
#[derive(Debug, Parser)]
#[command(name = "todosync-client")]
#[command(about = "CLI client for todosync API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "TODOSYNC_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Bearer token for authentication.
    #[arg(long, env = "TODOSYNC_TOKEN", default_value = "")]
    pub token: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Todo management.
    Todos(todos::TodosCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
