//! Aggregated system health dashboard
//!
//! Gathers CPU, memory, root-disk, and uptime in a single call and feeds
//! the three utilization percentages through the health classifier.

use rmcp::ErrorData as McpError;
use vitals_collect::cpu::LoadAverage;
use vitals_collect::{collect_cpu_metrics, collect_disk_usage, collect_memory_metrics, info};
use vitals_core::{bytes_to_human, classify, HealthVerdict, MetricSample};

use super::run_blocking;
use crate::mcp::error::OptionToMcpResult;

/// Result of the system health tool.
pub struct SystemHealthResult {
    pub verdict: HealthVerdict,
    pub sample: MetricSample,
    pub load: LoadAverage,
    pub memory_available_bytes: u64,
    pub memory_total_bytes: u64,
    pub disk_free_bytes: u64,
    pub disk_total_bytes: u64,
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub hostname: String,
}

impl SystemHealthResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        let mut message = format!(
            "Status: {} | CPU {:.1}% | memory {:.1}% | disk {:.1}% | up {}",
            self.verdict.status,
            self.sample.cpu_usage_percent,
            self.sample.memory_usage_percent,
            self.sample.disk_usage_percent,
            self.uptime_human,
        );
        for warning in &self.verdict.warnings {
            message.push_str("\n- ");
            message.push_str(warning);
        }
        message
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": self.verdict.status,
            "warnings": self.verdict.warnings,
            "cpu": {
                "usage_percent": self.sample.cpu_usage_percent,
                "load_1m": self.load.one,
                "load_5m": self.load.five,
                "load_15m": self.load.fifteen,
            },
            "memory": {
                "usage_percent": self.sample.memory_usage_percent,
                "available_bytes": self.memory_available_bytes,
                "available_human": bytes_to_human(self.memory_available_bytes),
                "total_human": bytes_to_human(self.memory_total_bytes),
            },
            "disk": {
                "mount_point": "/",
                "usage_percent": self.sample.disk_usage_percent,
                "free_bytes": self.disk_free_bytes,
                "free_human": bytes_to_human(self.disk_free_bytes),
                "total_human": bytes_to_human(self.disk_total_bytes),
            },
            "uptime": {
                "seconds": self.uptime_seconds,
                "human": self.uptime_human,
            },
            "hostname": self.hostname,
        })
    }
}

/// Core system health implementation
pub async fn system_health_impl() -> Result<SystemHealthResult, McpError> {
    let (cpu, memory, root_disk) = run_blocking(|| {
        let cpu = collect_cpu_metrics();
        let memory = collect_memory_metrics();
        let root_disk = collect_disk_usage(&["/".to_string()]).into_iter().next();
        (cpu, memory, root_disk)
    })
    .await?;

    let root_disk = root_disk.mcp_ok_or("Failed to get root disk info")?;

    let sample = MetricSample {
        cpu_usage_percent: cpu.usage_percent,
        memory_usage_percent: memory.ram.usage_percent,
        disk_usage_percent: root_disk.usage_percent,
    };
    let verdict = classify(&sample);

    let uptime_seconds = info::uptime_seconds();

    Ok(SystemHealthResult {
        verdict,
        sample,
        load: cpu.load_average,
        memory_available_bytes: memory.ram.available_bytes,
        memory_total_bytes: memory.ram.total_bytes,
        disk_free_bytes: root_disk.free_bytes,
        disk_total_bytes: root_disk.total_bytes,
        uptime_seconds,
        uptime_human: info::format_duration(uptime_seconds),
        hostname: info::hostname(),
    })
}
