//! One-shot health dashboard command

use anyhow::{anyhow, Result};
use std::path::Path;

use super::load_effective_config;
use crate::MetricOverrides;
use vitals_api::mcp::server::tools::system_health_impl;

/// Print the health dashboard once and exit.
///
/// Exit status mirrors the verdict so the command works in scripts and
/// health checks: 0 healthy, 1 warning, 2 critical.
pub async fn run(config_path: &Path, overrides: &MetricOverrides) -> Result<()> {
    // Config is loaded for validation parity with the server, even though
    // the dashboard itself has no tunables
    let _config = load_effective_config(config_path, overrides)?;

    let result = system_health_impl()
        .await
        .map_err(|e| anyhow!("{}", e.message))?;

    println!("{}", result.build_message());
    println!("{}", serde_json::to_string_pretty(&result.build_json())?);

    match result.verdict.status {
        vitals_core::HealthStatus::Healthy => Ok(()),
        vitals_core::HealthStatus::Warning => std::process::exit(1),
        vitals_core::HealthStatus::Critical => std::process::exit(2),
    }
}
