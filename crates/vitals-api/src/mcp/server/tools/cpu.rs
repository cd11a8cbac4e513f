//! CPU metrics tool

use rmcp::ErrorData as McpError;
use std::sync::Arc;
use vitals_collect::{collect_cpu_metrics, CpuMetrics};
use vitals_core::{convert_temperature, TempUnit};

use super::{resolve_temp_unit, run_blocking};
use crate::mcp::params::CpuMetricsParams;
use crate::state::ApiState;

/// Result of the CPU metrics tool.
pub struct CpuMetricsResult {
    pub metrics: CpuMetrics,
    pub temp_unit: TempUnit,
}

impl CpuMetricsResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        let temp = match self.metrics.temperature_celsius {
            Some(celsius) => format!("{:.1}°C", celsius),
            None => "n/a".to_string(),
        };
        format!(
            "CPU {:.1}% across {} cores | load {:.2}/{:.2}/{:.2} | temp {}",
            self.metrics.usage_percent,
            self.metrics.core_count,
            self.metrics.load_average.one,
            self.metrics.load_average.five,
            self.metrics.load_average.fifteen,
            temp,
        )
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        let temp_celsius = self.metrics.temperature_celsius;
        serde_json::json!({
            "usage_percent": self.metrics.usage_percent,
            "per_cpu_percent": self.metrics.per_cpu_percent,
            "core_count": self.metrics.core_count,
            "physical_cores": self.metrics.physical_cores,
            "frequency_mhz": self.metrics.frequency_mhz,
            "model": self.metrics.brand,
            "load_average": self.metrics.load_average,
            "temperature_celsius": temp_celsius,
            "temperature_converted": temp_celsius.map(|c| convert_temperature(c, self.temp_unit)),
            "temperature_unit": self.temp_unit.as_str(),
            "has_temperature": temp_celsius.is_some(),
        })
    }
}

/// Core CPU metrics implementation
pub async fn cpu_metrics_impl(
    state: &Arc<ApiState>,
    params: CpuMetricsParams,
) -> Result<CpuMetricsResult, McpError> {
    let temp_unit = resolve_temp_unit(params.temp_unit.as_deref(), state.config.metrics.temp_unit);
    let metrics = run_blocking(collect_cpu_metrics).await?;

    Ok(CpuMetricsResult { metrics, temp_unit })
}
