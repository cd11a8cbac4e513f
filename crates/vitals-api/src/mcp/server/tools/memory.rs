//! Memory metrics tool

use rmcp::ErrorData as McpError;
use vitals_collect::{collect_memory_metrics, MemoryMetrics};
use vitals_core::bytes_to_human;

use super::run_blocking;

/// Result of the memory metrics tool.
pub struct MemoryMetricsResult {
    pub metrics: MemoryMetrics,
}

impl MemoryMetricsResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        format!(
            "RAM {:.1}% used ({} of {}) | swap {:.1}% used ({} of {})",
            self.metrics.ram.usage_percent,
            bytes_to_human(self.metrics.ram.used_bytes),
            bytes_to_human(self.metrics.ram.total_bytes),
            self.metrics.swap.usage_percent,
            bytes_to_human(self.metrics.swap.used_bytes),
            bytes_to_human(self.metrics.swap.total_bytes),
        )
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        let ram = &self.metrics.ram;
        let swap = &self.metrics.swap;
        serde_json::json!({
            "ram": {
                "total_bytes": ram.total_bytes,
                "total_human": bytes_to_human(ram.total_bytes),
                "available_bytes": ram.available_bytes,
                "available_human": bytes_to_human(ram.available_bytes),
                "used_bytes": ram.used_bytes,
                "used_human": bytes_to_human(ram.used_bytes),
                "free_bytes": ram.free_bytes,
                "free_human": bytes_to_human(ram.free_bytes),
                "usage_percent": ram.usage_percent,
            },
            "swap": {
                "total_bytes": swap.total_bytes,
                "total_human": bytes_to_human(swap.total_bytes),
                "used_bytes": swap.used_bytes,
                "used_human": bytes_to_human(swap.used_bytes),
                "free_bytes": swap.free_bytes,
                "free_human": bytes_to_human(swap.free_bytes),
                "usage_percent": swap.usage_percent,
            },
        })
    }
}

/// Core memory metrics implementation
pub async fn memory_metrics_impl() -> Result<MemoryMetricsResult, McpError> {
    let metrics = run_blocking(collect_memory_metrics).await?;
    Ok(MemoryMetricsResult { metrics })
}
