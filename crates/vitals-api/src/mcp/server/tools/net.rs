//! Network interface and connection tools

use rmcp::ErrorData as McpError;
use std::sync::Arc;
use vitals_collect::{collect_connections, collect_net_metrics, ConnKind, Connection, InterfaceMetrics};
use vitals_core::split_and_trim;

use super::run_blocking;
use crate::mcp::error::ToMcpResult;
use crate::mcp::params::{ConnectionsParams, NetworkMetricsParams};
use crate::state::ApiState;

// ============================================================================
// get_network_metrics Implementation
// ============================================================================

/// Result of the network metrics tool.
pub struct NetworkMetricsResult {
    pub interfaces: Vec<InterfaceMetrics>,
}

impl NetworkMetricsResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        format!("{} interface(s) reported", self.interfaces.len())
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        serde_json::json!({ "interfaces": self.interfaces })
    }
}

/// Core network metrics implementation
pub async fn net_metrics_impl(
    state: &Arc<ApiState>,
    params: NetworkMetricsParams,
) -> Result<NetworkMetricsResult, McpError> {
    let interfaces = match params.interfaces.as_deref() {
        Some(list) if !list.trim().is_empty() => split_and_trim(list),
        _ => state.config.metrics.interfaces.clone(),
    };

    let interfaces = run_blocking(move || collect_net_metrics(&interfaces))
        .await?
        .mcp_context("Failed to get network stats")?;

    Ok(NetworkMetricsResult { interfaces })
}

// ============================================================================
// get_network_connections Implementation
// ============================================================================

/// Result of the network connections tool.
pub struct ConnectionsResult {
    pub connections: Vec<Connection>,
    pub kind: ConnKind,
    pub status_filter: Option<String>,
}

impl ConnectionsResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        match &self.status_filter {
            Some(status) => format!(
                "{} {} connection(s) in state {}",
                self.connections.len(),
                self.kind.as_str(),
                status
            ),
            None => format!(
                "{} {} connection(s)",
                self.connections.len(),
                self.kind.as_str()
            ),
        }
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        let mut result = serde_json::json!({
            "connections": self.connections,
            "total": self.connections.len(),
            "kind": self.kind.as_str(),
        });
        if let (Some(status), Some(obj)) = (&self.status_filter, result.as_object_mut()) {
            obj.insert("status_filter".into(), status.clone().into());
        }
        result
    }
}

/// Core network connections implementation
pub async fn connections_impl(params: ConnectionsParams) -> Result<ConnectionsResult, McpError> {
    let kind = ConnKind::from_str_opt(params.kind.as_deref());
    let status_filter = params
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_ascii_uppercase);

    let filter = status_filter.clone();
    let connections = run_blocking(move || collect_connections(kind, filter.as_deref()))
        .await?
        .mcp_context("Failed to get network connections")?;

    Ok(ConnectionsResult {
        connections,
        kind,
        status_filter,
    })
}
