//! MCP (Model Context Protocol) server command
//!
//! Serves vitals tools over stdio. The transport and JSON-RPC framing are
//! handled by rmcp; this command wires config, state, and signals.

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::path::Path;
use std::sync::Arc;
use vitals_api::{ApiState, VitalsServer};
use vitals_logging::info;

use super::load_effective_config;
use crate::MetricOverrides;

/// Run the MCP server on stdio until the client disconnects or a signal
/// arrives.
pub async fn run(config_path: &Path, overrides: &MetricOverrides) -> Result<()> {
    let config = load_effective_config(config_path, overrides)?;

    let state = Arc::new(ApiState::new(config));
    let server = VitalsServer::new(state);

    info!("MCP server created, starting stdio transport...");
    let service = server.serve(stdio()).await?;
    info!("Server ready. Awaiting MCP client requests via stdio.");

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;
        let mut sigint =
            signal(SignalKind::interrupt()).context("failed to install SIGINT handler")?;

        tokio::select! {
            result = service.waiting() => {
                result?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down MCP server");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT (Ctrl+C), shutting down MCP server");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            result = service.waiting() => {
                result?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down MCP server");
            }
        }
    }

    Ok(())
}
