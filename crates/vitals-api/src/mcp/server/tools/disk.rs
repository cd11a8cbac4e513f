//! Disk usage and block-device I/O tools

use rmcp::ErrorData as McpError;
use std::sync::Arc;
use vitals_collect::{collect_disk_io, collect_disk_usage, DiskIoStats, DiskUsage};
use vitals_core::{bytes_to_human, split_and_trim};

use super::run_blocking;
use crate::mcp::error::ToMcpResult;
use crate::mcp::params::{DiskIoParams, DiskMetricsParams};
use crate::state::ApiState;

// ============================================================================
// get_disk_metrics Implementation
// ============================================================================

/// Result of the disk usage tool.
pub struct DiskMetricsResult {
    pub disks: Vec<DiskUsage>,
    pub human_readable: bool,
}

impl DiskMetricsResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        format!("{} filesystem(s) reported", self.disks.len())
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        let disks: Vec<serde_json::Value> = self
            .disks
            .iter()
            .map(|d| {
                let mut entry = serde_json::json!({
                    "mount_point": d.mount_point,
                    "device": d.device,
                    "fstype": d.fstype,
                    "total_bytes": d.total_bytes,
                    "used_bytes": d.used_bytes,
                    "free_bytes": d.free_bytes,
                    "usage_percent": d.usage_percent,
                    "removable": d.removable,
                });
                if self.human_readable {
                    if let Some(obj) = entry.as_object_mut() {
                        obj.insert("total_human".into(), bytes_to_human(d.total_bytes).into());
                        obj.insert("used_human".into(), bytes_to_human(d.used_bytes).into());
                        obj.insert("free_human".into(), bytes_to_human(d.free_bytes).into());
                    }
                }
                entry
            })
            .collect();

        serde_json::json!({ "disks": disks })
    }
}

/// Core disk usage implementation
pub async fn disk_metrics_impl(
    state: &Arc<ApiState>,
    params: DiskMetricsParams,
) -> Result<DiskMetricsResult, McpError> {
    let mount_points = match params.mount_points.as_deref() {
        Some(list) if !list.trim().is_empty() => split_and_trim(list),
        _ => state.config.metrics.mount_points.clone(),
    };
    let human_readable = params.human_readable.unwrap_or(true);

    let disks = run_blocking(move || collect_disk_usage(&mount_points)).await?;

    Ok(DiskMetricsResult {
        disks,
        human_readable,
    })
}

// ============================================================================
// get_disk_io_metrics Implementation
// ============================================================================

/// Result of the disk I/O tool.
pub struct DiskIoResult {
    pub devices: Vec<DiskIoStats>,
}

impl DiskIoResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        format!("{} block device(s) reported", self.devices.len())
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        let devices: Vec<serde_json::Value> = self
            .devices
            .iter()
            .map(|d| {
                serde_json::json!({
                    "device": d.device,
                    "read_count": d.read_count,
                    "write_count": d.write_count,
                    "read_bytes": d.read_bytes,
                    "read_human": bytes_to_human(d.read_bytes),
                    "write_bytes": d.write_bytes,
                    "write_human": bytes_to_human(d.write_bytes),
                    "read_time_ms": d.read_time_ms,
                    "write_time_ms": d.write_time_ms,
                    "io_time_ms": d.io_time_ms,
                    "weighted_io_ms": d.weighted_io_ms,
                    "in_flight": d.in_flight,
                })
            })
            .collect();

        serde_json::json!({
            "devices": devices,
            "total": self.devices.len(),
        })
    }
}

/// Core disk I/O implementation
pub async fn disk_io_impl(params: DiskIoParams) -> Result<DiskIoResult, McpError> {
    let devices = match params.devices.as_deref() {
        Some(list) if !list.trim().is_empty() => split_and_trim(list),
        _ => Vec::new(),
    };

    let stats = run_blocking(move || collect_disk_io(&devices))
        .await?
        .mcp_context("Failed to get disk I/O stats")?;

    Ok(DiskIoResult { devices: stats })
}
