//! Tool implementation helpers
//!
//! Implementation logic extracted from the MCP tool methods: the
//! `#[tool_router]` macro requires all `#[tool]` methods in one impl block,
//! so the heavy lifting lives here and `server.rs` keeps thin wrappers.
//!
//! # Module Organization
//!
//! - `system` - host info
//! - `cpu` - CPU usage and temperature
//! - `memory` - RAM and swap
//! - `disk` - filesystem usage and block-device I/O
//! - `net` - interface counters and socket tables
//! - `process` - process list
//! - `thermal` - thermal zones and Pi firmware probes
//! - `health` - aggregated health dashboard
//! - `docker` - container metrics
//! - `service` - systemd unit status

pub mod cpu;
pub mod disk;
pub mod docker;
pub mod health;
pub mod memory;
pub mod net;
pub mod process;
pub mod service;
pub mod system;
pub mod thermal;

pub use cpu::{cpu_metrics_impl, CpuMetricsResult};
pub use disk::{disk_io_impl, disk_metrics_impl, DiskIoResult, DiskMetricsResult};
pub use docker::{docker_metrics_impl, DockerMetricsResult};
pub use health::{system_health_impl, SystemHealthResult};
pub use memory::{memory_metrics_impl, MemoryMetricsResult};
pub use net::{connections_impl, net_metrics_impl, ConnectionsResult, NetworkMetricsResult};
pub use process::{process_list_impl, ProcessListResult};
pub use service::{service_status_impl, ServiceStatusResult};
pub use system::{system_info_impl, SystemInfoResult};
pub use thermal::{thermal_status_impl, ThermalStatusResult};

use rmcp::ErrorData as McpError;
use vitals_core::TempUnit;

/// Run a blocking collector on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, McpError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| McpError::internal_error(format!("collector task failed: {}", e), None))
}

/// Resolve the effective temperature unit for a request.
///
/// Absent or unrecognized per-request values fall back to the configured
/// unit rather than erroring.
pub(crate) fn resolve_temp_unit(requested: Option<&str>, configured: TempUnit) -> TempUnit {
    requested
        .and_then(|s| s.parse::<TempUnit>().ok())
        .unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_unit_falls_back_to_configured() {
        assert_eq!(
            resolve_temp_unit(Some("kelvin"), TempUnit::Celsius),
            TempUnit::Kelvin
        );
        assert_eq!(
            resolve_temp_unit(Some("rankine"), TempUnit::Fahrenheit),
            TempUnit::Fahrenheit
        );
        assert_eq!(resolve_temp_unit(None, TempUnit::Fahrenheit), TempUnit::Fahrenheit);
    }
}
