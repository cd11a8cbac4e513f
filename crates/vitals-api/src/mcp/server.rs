//! MCP server implementation for vitals
//!
//! This server exposes host metrics to LLM agents via the Model Context
//! Protocol.
//!
//! # Module Structure
//!
//! Parameter types live in `params.rs`. This file contains:
//! - `VitalsServer` struct
//! - Tool wrappers (via `#[tool_router]` macro)
//! - `ServerHandler` implementation
//!
//! Heavy logic lives in `server/tools/*`; the `#[tool_router]` macro
//! requires all `#[tool]` methods in one impl block, so the wrappers here
//! stay thin.

use crate::mcp::params::{
    ConnectionsParams, CpuMetricsParams, DiskIoParams, DiskMetricsParams, DockerMetricsParams,
    NetworkMetricsParams, ProcessListParams, ServiceStatusParams, ThermalStatusParams,
};
use crate::state::ApiState;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

// Tool implementation helpers for reducing server.rs complexity
pub mod tools;

/// vitals MCP server
///
/// Every tool samples the host fresh on each call; the server itself keeps
/// no mutable state, so concurrent tool calls need no coordination.
#[derive(Clone)]
pub struct VitalsServer {
    state: Arc<ApiState>,
    tool_router: ToolRouter<Self>,
}

/// Assemble the standard two-part tool response: a short human-readable
/// summary plus the full JSON payload.
fn text_and_json(message: String, json: serde_json::Value) -> CallToolResult {
    CallToolResult::success(vec![
        Content::text(message),
        Content::text(
            serde_json::to_string_pretty(&json)
                .unwrap_or_else(|_| "{\"error\": \"failed to serialize response\"}".to_string()),
        ),
    ])
}

#[tool_router]
impl VitalsServer {
    /// Create a new MCP server with the given state
    pub fn new(state: Arc<ApiState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Host Tools
    // ========================================================================

    /// Host identity, kernel, and uptime
    #[tool(
        description = "Get system information including hostname, OS, kernel, uptime, and platform details."
    )]
    async fn get_system_info(&self) -> Result<CallToolResult, McpError> {
        let result = tools::system_info_impl().await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    /// CPU usage, temperature, and load average
    #[tool(description = "Get CPU usage, per-core percentages, temperature, and load average.")]
    async fn get_cpu_metrics(
        &self,
        Parameters(params): Parameters<CpuMetricsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::cpu_metrics_impl(&self.state, params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    /// RAM and swap usage
    #[tool(description = "Get memory usage statistics including RAM and swap.")]
    async fn get_memory_metrics(&self) -> Result<CallToolResult, McpError> {
        let result = tools::memory_metrics_impl().await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    // ========================================================================
    // Storage Tools
    // ========================================================================

    /// Filesystem usage per mount point
    #[tool(description = "Get disk usage statistics for mount points.")]
    async fn get_disk_metrics(
        &self,
        Parameters(params): Parameters<DiskMetricsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::disk_metrics_impl(&self.state, params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    /// Block device I/O counters
    #[tool(
        description = "Get disk I/O statistics including read/write throughput, IOPS, and I/O time."
    )]
    async fn get_disk_io_metrics(
        &self,
        Parameters(params): Parameters<DiskIoParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::disk_io_impl(params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    // ========================================================================
    // Network Tools
    // ========================================================================

    /// Interface counters and addresses
    #[tool(description = "Get network interface statistics.")]
    async fn get_network_metrics(
        &self,
        Parameters(params): Parameters<NetworkMetricsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::net_metrics_impl(&self.state, params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    /// Socket tables with owning PID where resolvable
    #[tool(
        description = "Get active network connections with local/remote addresses, status, and owning PID."
    )]
    async fn get_network_connections(
        &self,
        Parameters(params): Parameters<ConnectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::connections_impl(params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    // ========================================================================
    // Process & Service Tools
    // ========================================================================

    /// Process list sorted by resource usage
    #[tool(description = "Get list of running processes sorted by resource usage.")]
    async fn get_process_list(
        &self,
        Parameters(params): Parameters<ProcessListParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::process_list_impl(&self.state, params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    /// systemd unit status
    #[tool(description = "Get systemd service status for specified services.")]
    async fn get_service_status(
        &self,
        Parameters(params): Parameters<ServiceStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::service_status_impl(params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    // ========================================================================
    // Platform Tools
    // ========================================================================

    /// Thermal zones and Pi throttle flags
    #[tool(
        description = "Get thermal status including temperatures and throttling information."
    )]
    async fn get_thermal_status(
        &self,
        Parameters(params): Parameters<ThermalStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::thermal_status_impl(&self.state, params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    /// Docker container metrics via cgroups
    #[tool(
        description = "Get Docker container metrics including CPU and memory usage via cgroups."
    )]
    async fn get_docker_metrics(
        &self,
        Parameters(params): Parameters<DockerMetricsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::docker_metrics_impl(params).await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }

    // ========================================================================
    // Dashboard
    // ========================================================================

    /// Aggregated health dashboard
    #[tool(
        description = "Get an aggregated system health dashboard with CPU, memory, disk, and uptime in a single call."
    )]
    async fn get_system_health(&self) -> Result<CallToolResult, McpError> {
        let result = tools::system_health_impl().await?;
        Ok(text_and_json(result.build_message(), result.build_json()))
    }
}

// Implement the ServerHandler trait to define server capabilities
#[tool_handler(router = self.tool_router)]
impl rmcp::ServerHandler for VitalsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "# vitals - Host Metrics for AI Agents\n\n\
                 Read-only tools for inspecting the host this server runs on.\n\n\
                 ## Quick Start\n\
                 - get_system_health: one-call dashboard with status and warnings\n\
                 - get_system_info: hostname, OS, kernel, uptime\n\
                 - get_cpu_metrics / get_memory_metrics / get_disk_metrics: per-domain detail\n\n\
                 ## Filters\n\
                 - get_process_list(limit, sort_by=cpu|memory|pid)\n\
                 - get_disk_metrics(mount_points='/,/home')\n\
                 - get_network_connections(kind=tcp|udp, status=LISTEN)\n\
                 - get_service_status(services='ssh,nginx') for systemd units\n\n\
                 ## Notes\n\
                 - Temperatures honor temp_unit (celsius/fahrenheit/kelvin)\n\
                 - All tools sample fresh on every call; nothing is cached"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Internal Unit Tests
// ============================================================================
// These tests have access to private methods and exercise tool logic
// directly.

#[cfg(test)]
mod tests;
