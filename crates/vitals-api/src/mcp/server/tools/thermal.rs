//! Thermal status tool

use rmcp::ErrorData as McpError;
use std::sync::Arc;
use vitals_collect::{collect_thermal_status, ThermalStatus};
use vitals_core::{convert_temperature, TempUnit};

use super::resolve_temp_unit;
use crate::mcp::params::ThermalStatusParams;
use crate::state::ApiState;

/// Result of the thermal status tool.
pub struct ThermalStatusResult {
    pub status: ThermalStatus,
    pub temp_unit: TempUnit,
}

impl ThermalStatusResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        let cpu = match self.status.cpu_temperature_celsius {
            Some(celsius) => format!("CPU {:.1}°C", celsius),
            None => "CPU temp n/a".to_string(),
        };
        let gpu = match self.status.gpu_temperature_celsius {
            Some(celsius) => format!(" | GPU {:.1}°C", celsius),
            None => String::new(),
        };
        format!("{}{} | platform: {}", cpu, gpu, self.status.platform)
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        let cpu = self.status.cpu_temperature_celsius;
        let gpu = self.status.gpu_temperature_celsius;

        let mut gpu_entry = serde_json::json!({ "available": gpu.is_some() });
        if let (Some(celsius), Some(obj)) = (gpu, gpu_entry.as_object_mut()) {
            obj.insert("celsius".into(), celsius.into());
            obj.insert(
                "converted".into(),
                serde_json::json!(convert_temperature(celsius, self.temp_unit)),
            );
        }

        let mut throttle_entry =
            serde_json::json!({ "available": self.status.throttling.is_some() });
        if let (Some(flags), Some(obj)) =
            (&self.status.throttling, throttle_entry.as_object_mut())
        {
            obj.insert("status".into(), serde_json::json!(flags));
        }

        serde_json::json!({
            "cpu_temperature": {
                "available": cpu.is_some(),
                "celsius": cpu,
                "converted": cpu.map(|c| convert_temperature(c, self.temp_unit)),
                "unit": self.temp_unit.as_str(),
            },
            "gpu_temperature": gpu_entry,
            "throttling": throttle_entry,
            "platform": self.status.platform,
        })
    }
}

/// Core thermal status implementation
pub async fn thermal_status_impl(
    state: &Arc<ApiState>,
    params: ThermalStatusParams,
) -> Result<ThermalStatusResult, McpError> {
    let temp_unit = resolve_temp_unit(params.temp_unit.as_deref(), state.config.metrics.temp_unit);
    let status = collect_thermal_status(state.config.metrics.enable_gpu).await;

    Ok(ThermalStatusResult { status, temp_unit })
}
