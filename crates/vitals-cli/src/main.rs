//! vitals command-line interface
//!
//! `vitals mcp` is the main entry point: it serves host metrics as MCP
//! tools over stdio. `vitals health` prints the one-shot dashboard and
//! `vitals init` writes a default config file.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vitals_logging::LogConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitals", version, about = "Host vitals as MCP tools for AI agents")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = "vitals.toml")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Write logs to this file instead of the terminal
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Per-invocation metric overrides, taking precedence over the config file.
#[derive(Args, Debug, Default, Clone)]
struct MetricOverrides {
    /// Temperature unit: celsius, fahrenheit, or kelvin
    #[arg(long)]
    temp_unit: Option<String>,

    /// Maximum number of processes to list (clamped to 1..=50)
    #[arg(long)]
    max_processes: Option<usize>,

    /// Comma-separated mount points to monitor (empty = all)
    #[arg(long)]
    mount_points: Option<String>,

    /// Comma-separated interfaces to monitor (empty = all)
    #[arg(long)]
    interfaces: Option<String>,

    /// Attempt to read GPU metrics if available
    #[arg(long)]
    enable_gpu: Option<bool>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve MCP tools over stdio
    Mcp {
        #[command(flatten)]
        overrides: MetricOverrides,
    },
    /// Print the system health dashboard once and exit
    Health {
        #[command(flatten)]
        overrides: MetricOverrides,
    },
    /// Create a default config file
    Init,
}

/// Initialize logging for the selected command, returning the file guard
/// when `--log-file` is set.
fn init_logging(cli: &Cli) -> Result<Option<vitals_logging::WorkerGuard>> {
    let config = match cli.command {
        // stdout carries JSON-RPC; all logs go to stderr
        Command::Mcp { .. } => LogConfig::mcp(cli.debug),
        // keep stdout clean for the dashboard output
        Command::Health { .. } => {
            LogConfig::cli(cli.debug).output(vitals_logging::LogOutput::Stderr)
        }
        Command::Init => LogConfig::cli(cli.debug),
    };

    match &cli.log_file {
        Some(path) => {
            let guard = vitals_logging::init_with_file(config, path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Ok(Some(guard))
        }
        None => {
            vitals_logging::init(config);
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    match cli.command {
        Command::Mcp { ref overrides } => commands::mcp::run(&cli.config, overrides).await,
        Command::Health { ref overrides } => commands::health::run(&cli.config, overrides).await,
        Command::Init => commands::init::run(&cli.config),
    }
}
