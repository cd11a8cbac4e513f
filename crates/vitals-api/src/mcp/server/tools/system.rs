//! System info tool

use rmcp::ErrorData as McpError;
use vitals_collect::{collect_system_info, SystemInfo};

use super::run_blocking;

/// Result of the system info tool.
pub struct SystemInfoResult {
    pub info: SystemInfo,
}

impl SystemInfoResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        format!(
            "{} | {} {} | kernel {} ({}) | up {}",
            self.info.hostname,
            self.info.platform,
            self.info.platform_version,
            self.info.kernel_version,
            self.info.kernel_arch,
            self.info.uptime_human,
        )
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        serde_json::json!({
            "hostname": self.info.hostname,
            "os": self.info.os,
            "platform": self.info.platform,
            "platform_version": self.info.platform_version,
            "kernel_version": self.info.kernel_version,
            "kernel_arch": self.info.kernel_arch,
            "uptime_seconds": self.info.uptime_seconds,
            "uptime_human": self.info.uptime_human,
            "boot_time": self.info.boot_time,
            "procs": self.info.procs,
        })
    }
}

/// Core system info implementation
pub async fn system_info_impl() -> Result<SystemInfoResult, McpError> {
    let info = run_blocking(collect_system_info).await?;
    Ok(SystemInfoResult { info })
}
