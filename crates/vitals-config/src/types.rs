//! Configuration types
//!
//! The TOML file mirrors this structure directly. `Config::validate`
//! normalizes string fields and applies the lenient range clamps; it is the
//! single place where raw file/CLI input becomes trusted values.

use serde::{Deserialize, Serialize};
use vitals_core::params::{DEFAULT_PROCESS_LIMIT, MAX_PROCESS_LIMIT, MIN_PROCESS_LIMIT};
use vitals_core::{Error, TempUnit};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Top-level vitals configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub metrics: MetricsSection,
    #[serde(default)]
    pub log: LogSection,
}

/// Metric acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSection {
    /// Temperature unit for CPU/GPU readings.
    #[serde(default)]
    pub temp_unit: TempUnit,
    /// Process-list size, clamped to [1, 50].
    #[serde(default = "default_max_processes")]
    pub max_processes: usize,
    /// Mount points to report; empty means all non-pseudo mounts.
    #[serde(default)]
    pub mount_points: Vec<String>,
    /// Interfaces to report; empty means all non-loopback interfaces.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Probe vcgencmd for GPU temperature and throttle flags.
    #[serde(default = "default_enable_gpu")]
    pub enable_gpu: bool,
}

fn default_max_processes() -> usize {
    DEFAULT_PROCESS_LIMIT
}

fn default_enable_gpu() -> bool {
    true
}

impl Default for MetricsSection {
    fn default() -> Self {
        MetricsSection {
            temp_unit: TempUnit::default(),
            max_processes: DEFAULT_PROCESS_LIMIT,
            mount_points: Vec::new(),
            interfaces: Vec::new(),
            enable_gpu: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSection {
    /// Default level when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogSection {
    fn default() -> Self {
        LogSection {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Normalize and validate the configuration in place.
    ///
    /// An out-of-range `max_processes` is silently corrected: values below
    /// the minimum are raised to the default, values above the maximum are
    /// lowered to the maximum. This matches the lenient-default policy of
    /// the flag surface rather than treating it as a validation error.
    pub fn validate(&mut self) -> Result<(), Error> {
        if self.metrics.max_processes < MIN_PROCESS_LIMIT {
            self.metrics.max_processes = DEFAULT_PROCESS_LIMIT;
        }
        if self.metrics.max_processes > MAX_PROCESS_LIMIT {
            self.metrics.max_processes = MAX_PROCESS_LIMIT;
        }

        self.metrics.mount_points.retain(|m| !m.trim().is_empty());
        self.metrics.interfaces.retain(|i| !i.trim().is_empty());

        Ok(())
    }
}
