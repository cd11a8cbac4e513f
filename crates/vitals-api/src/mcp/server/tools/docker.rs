//! Docker container metrics tool

use rmcp::ErrorData as McpError;
use vitals_collect::{collect_docker_metrics, ContainerMetrics};
use vitals_core::bytes_to_human;

use crate::mcp::params::DockerMetricsParams;

/// Result of the Docker metrics tool.
pub struct DockerMetricsResult {
    pub containers: Vec<ContainerMetrics>,
}

impl DockerMetricsResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        format!("{} container(s) reported", self.containers.len())
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        let containers: Vec<serde_json::Value> = self
            .containers
            .iter()
            .map(|c| {
                let mut entry = serde_json::json!({
                    "container_id": c.container_id,
                    "name": c.name,
                    "image": c.image,
                    "status": c.status,
                    "running": c.running,
                });
                if let Some(obj) = entry.as_object_mut() {
                    if let Some(cpu) = &c.cpu {
                        obj.insert("cpu".into(), serde_json::json!(cpu));
                    }
                    if let Some(memory) = &c.memory {
                        let mut mem = serde_json::json!(memory);
                        if let Some(mem_obj) = mem.as_object_mut() {
                            mem_obj.insert(
                                "current_human".into(),
                                bytes_to_human(memory.current_bytes).into(),
                            );
                        }
                        obj.insert("memory".into(), mem);
                    }
                }
                entry
            })
            .collect();

        serde_json::json!({
            "containers": containers,
            "total": self.containers.len(),
        })
    }
}

/// Core Docker metrics implementation
///
/// An unreachable Docker daemon is an invalid-state error for the whole
/// call (there is nothing to report); per-container cgroup failures only
/// drop the cpu/memory sections.
pub async fn docker_metrics_impl(
    params: DockerMetricsParams,
) -> Result<DockerMetricsResult, McpError> {
    let filter = params
        .container_id
        .as_deref()
        .filter(|s| !s.trim().is_empty());

    let containers = collect_docker_metrics(filter).await.map_err(|e| {
        McpError::internal_error(
            format!("Docker not available or no containers found: {}", e),
            None,
        )
    })?;

    Ok(DockerMetricsResult { containers })
}
