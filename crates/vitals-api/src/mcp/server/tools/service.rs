//! systemd service status tool

use rmcp::ErrorData as McpError;
use tracing::debug;
use vitals_collect::{query_service, ServiceStatus};
use vitals_core::split_and_trim;

use crate::mcp::params::ServiceStatusParams;

/// Result of the service status tool.
pub struct ServiceStatusResult {
    pub services: Vec<ServiceStatus>,
}

impl ServiceStatusResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        let active = self
            .services
            .iter()
            .filter(|s| s.active_state.as_deref() == Some("active"))
            .count();
        format!("{} of {} service(s) active", active, self.services.len())
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        serde_json::json!({
            "services": self.services,
            "total": self.services.len(),
        })
    }
}

/// Core service status implementation
///
/// Queries units sequentially; per-unit failures are reported inline
/// (`available: false`) and never fail the whole call.
pub async fn service_status_impl(
    params: ServiceStatusParams,
) -> Result<ServiceStatusResult, McpError> {
    let names = split_and_trim(&params.services);
    if names.is_empty() {
        return Err(McpError::invalid_params(
            "services parameter is required".to_string(),
            None,
        ));
    }

    debug!(count = names.len(), "querying systemd units");
    let mut services = Vec::with_capacity(names.len());
    for name in &names {
        services.push(query_service(name).await);
    }

    Ok(ServiceStatusResult { services })
}
