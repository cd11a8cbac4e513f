//! Thermal zones and Raspberry Pi firmware probes
//!
//! CPU temperature comes from `/sys/class/thermal/thermal_zone*/temp`
//! (millidegrees Celsius). GPU temperature and throttle state come from
//! `vcgencmd`, which only exists on Raspberry Pi firmware; both degrade to
//! absent values elsewhere.

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::debug;
use vitals_config::constants::THERMAL_ZONE_PATHS;

/// Decoded `vcgencmd get_throttled` bitfield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleFlags {
    pub under_voltage_now: bool,
    pub arm_frequency_capped: bool,
    pub currently_throttled: bool,
    pub soft_temp_limit_active: bool,
    pub under_voltage_occurred: bool,
    pub freq_capped_occurred: bool,
    pub throttling_occurred: bool,
    pub soft_temp_occurred: bool,
    pub raw_value: String,
}

/// Thermal snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalStatus {
    pub cpu_temperature_celsius: Option<f64>,
    pub gpu_temperature_celsius: Option<f64>,
    pub throttling: Option<ThrottleFlags>,
    /// `raspberry_pi` when firmware throttle data is available, otherwise
    /// `generic_linux`.
    pub platform: &'static str,
}

/// Parse a thermal-zone reading in millidegrees Celsius.
pub fn parse_millidegrees(content: &str) -> Option<f64> {
    content
        .trim()
        .parse::<f64>()
        .ok()
        .map(|milli| milli / 1000.0)
}

/// Read the CPU temperature from the first readable thermal zone.
pub fn read_cpu_temp() -> Option<f64> {
    THERMAL_ZONE_PATHS.iter().find_map(|path| {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| parse_millidegrees(&content))
    })
}

/// Parse `vcgencmd measure_temp` output (`temp=45.2'C`).
pub fn parse_measure_temp(output: &str) -> Option<f64> {
    let rest = output.trim().strip_prefix("temp=")?;
    let end = rest.find("'C")?;
    rest[..end].parse::<f64>().ok()
}

/// Parse `vcgencmd get_throttled` output (`throttled=0x50005`).
pub fn parse_get_throttled(output: &str) -> Option<u32> {
    let hex = output.trim().strip_prefix("throttled=0x")?;
    u32::from_str_radix(hex, 16).ok()
}

/// Decode the firmware throttle bitfield into named flags.
pub fn decode_throttle_flags(value: u32) -> ThrottleFlags {
    ThrottleFlags {
        under_voltage_now: value & 0x1 != 0,
        arm_frequency_capped: value & 0x2 != 0,
        currently_throttled: value & 0x4 != 0,
        soft_temp_limit_active: value & 0x8 != 0,
        under_voltage_occurred: value & 0x10000 != 0,
        freq_capped_occurred: value & 0x20000 != 0,
        throttling_occurred: value & 0x40000 != 0,
        soft_temp_occurred: value & 0x80000 != 0,
        raw_value: format!("{:x}", value),
    }
}

async fn vcgencmd(arg: &str) -> Option<String> {
    match Command::new("vcgencmd").arg(arg).output().await {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            debug!(arg, code = ?output.status.code(), "vcgencmd exited nonzero");
            None
        }
        Err(e) => {
            debug!(arg, error = %e, "vcgencmd not available");
            None
        }
    }
}

/// Collect the thermal snapshot.
///
/// `probe_gpu` gates the `vcgencmd` invocations; thermal zones are always
/// probed.
pub async fn collect_thermal_status(probe_gpu: bool) -> ThermalStatus {
    let cpu_temperature_celsius = read_cpu_temp();

    let (gpu_temperature_celsius, throttling) = if probe_gpu {
        let gpu = vcgencmd("measure_temp")
            .await
            .as_deref()
            .and_then(parse_measure_temp);
        let throttle = vcgencmd("get_throttled")
            .await
            .as_deref()
            .and_then(parse_get_throttled)
            .map(decode_throttle_flags);
        (gpu, throttle)
    } else {
        (None, None)
    };

    ThermalStatus {
        cpu_temperature_celsius,
        gpu_temperature_celsius,
        platform: if throttling.is_some() {
            "raspberry_pi"
        } else {
            "generic_linux"
        },
        throttling,
    }
}
