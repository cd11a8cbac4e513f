//! CPU utilization, frequency, and load average

use serde::{Deserialize, Serialize};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::thermal;

/// Load averages over 1/5/15 minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadAverage {
    #[serde(rename = "1min")]
    pub one: f64,
    #[serde(rename = "5min")]
    pub five: f64,
    #[serde(rename = "15min")]
    pub fifteen: f64,
}

/// CPU snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuMetrics {
    pub usage_percent: f64,
    pub per_cpu_percent: Vec<f64>,
    pub core_count: usize,
    pub physical_cores: Option<usize>,
    pub frequency_mhz: u64,
    pub brand: String,
    pub load_average: LoadAverage,
    /// CPU temperature in Celsius from the thermal zone, when readable.
    pub temperature_celsius: Option<f64>,
}

/// Sample CPU usage.
///
/// Usage percentages are deltas, so this refreshes twice with sysinfo's
/// minimum update interval in between. Blocking; run under
/// `spawn_blocking` from async contexts.
pub fn collect_cpu_metrics() -> CpuMetrics {
    let mut sys = System::new_with_specifics(
        RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()),
    );
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_usage();

    let per_cpu_percent: Vec<f64> = sys.cpus().iter().map(|c| f64::from(c.cpu_usage())).collect();
    let load = System::load_average();

    CpuMetrics {
        usage_percent: f64::from(sys.global_cpu_usage()),
        core_count: per_cpu_percent.len(),
        per_cpu_percent,
        physical_cores: sys.physical_core_count(),
        frequency_mhz: sys.cpus().first().map(|c| c.frequency()).unwrap_or(0),
        brand: sys
            .cpus()
            .first()
            .map(|c| c.brand().to_string())
            .unwrap_or_default(),
        load_average: LoadAverage {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        },
        temperature_celsius: thermal::read_cpu_temp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_finite() {
        let metrics = collect_cpu_metrics();
        assert!(metrics.usage_percent.is_finite());
        assert!(metrics.core_count > 0);
        assert_eq!(metrics.per_cpu_percent.len(), metrics.core_count);
        assert!(metrics.load_average.one.is_finite());
    }
}
