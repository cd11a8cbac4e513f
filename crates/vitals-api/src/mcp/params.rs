//! MCP parameter types
//!
//! One struct per tool that takes arguments. Validation and defaulting
//! happen once at the handler boundary: comma-separated lists go through
//! `split_and_trim`, limits through `clamp_process_limit`, and enum-ish
//! strings fall back leniently (unknown sort keys mean `cpu`, unknown
//! kinds mean `all`, an unknown per-request temp unit means the configured
//! unit).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for CPU metrics")]
pub struct CpuMetricsParams {
    #[schemars(
        description = "Override temperature unit: celsius, fahrenheit, or kelvin (default: configured unit)"
    )]
    pub temp_unit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for disk usage metrics")]
pub struct DiskMetricsParams {
    #[schemars(
        description = "Comma-separated mount points to check (overrides config default; empty = all real filesystems)"
    )]
    pub mount_points: Option<String>,
    #[schemars(description = "Include human-readable sizes alongside bytes (default: true)")]
    pub human_readable: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for network interface metrics")]
pub struct NetworkMetricsParams {
    #[schemars(
        description = "Comma-separated interface names to check (overrides config default; loopback only when listed explicitly)"
    )]
    pub interfaces: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for the process list")]
pub struct ProcessListParams {
    #[schemars(
        description = "Maximum number of processes to return, clamped to 1..=50 (default: configured limit)"
    )]
    pub limit: Option<u64>,
    #[schemars(description = "Sort by: cpu, memory, or pid (default: cpu)")]
    pub sort_by: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for thermal status")]
pub struct ThermalStatusParams {
    #[schemars(
        description = "Override temperature unit: celsius, fahrenheit, or kelvin (default: configured unit)"
    )]
    pub temp_unit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for disk I/O metrics")]
pub struct DiskIoParams {
    #[schemars(description = "Comma-separated device names to check (e.g. sda,nvme0n1)")]
    pub devices: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for Docker container metrics")]
pub struct DockerMetricsParams {
    #[schemars(description = "Container ID or name to filter results")]
    pub container_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for network connections")]
pub struct ConnectionsParams {
    #[schemars(description = "Connection type filter: tcp, udp, or all (default: all)")]
    pub kind: Option<String>,
    #[schemars(description = "Filter by connection status (e.g. LISTEN, ESTABLISHED)")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for systemd service status")]
pub struct ServiceStatusParams {
    #[schemars(description = "Comma-separated list of service names to check (required)")]
    pub services: String,
}
