//! Health classification for the system health dashboard
//!
//! A `MetricSample` is a point-in-time snapshot of CPU, memory, and
//! root-disk utilization. `classify` folds it into an overall status plus
//! human-readable warnings using fixed thresholds with a most-severe-wins
//! escalation rule.

use serde::{Deserialize, Serialize};

/// CPU usage above this is critical.
pub const CPU_CRITICAL_PERCENT: f64 = 95.0;
/// CPU usage above this (but not critical) is a warning.
pub const CPU_WARNING_PERCENT: f64 = 80.0;
/// Memory usage above this is critical.
pub const MEMORY_CRITICAL_PERCENT: f64 = 95.0;
/// Memory usage above this (but not critical) is a warning.
pub const MEMORY_WARNING_PERCENT: f64 = 85.0;
/// Disk usage above this is critical.
pub const DISK_CRITICAL_PERCENT: f64 = 95.0;
/// Disk usage above this (but not critical) is a warning.
pub const DISK_WARNING_PERCENT: f64 = 85.0;

/// Snapshot of the three utilization percentages feeding the classifier.
///
/// Values are conventionally 0-100 but not bounds-checked: data quality is
/// the supplier's concern, and the classifier is total over finite floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub cpu_usage_percent: f64,
    pub memory_usage_percent: f64,
    pub disk_usage_percent: f64,
}

/// Overall health status, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a sample.
///
/// `warnings` keeps evaluation order: CPU, then memory, then disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthVerdict {
    pub status: HealthStatus,
    pub warnings: Vec<String>,
}

/// Classify a sample into an overall status and warning list.
///
/// Each metric is checked against its critical threshold first, then its
/// warning threshold, with strict `>` comparisons: a value exactly at a
/// threshold does not trigger it. Status escalates monotonically; once
/// critical it is never lowered by a later check.
pub fn classify(sample: &MetricSample) -> HealthVerdict {
    let mut status = HealthStatus::Healthy;
    let mut warnings = Vec::new();

    let checks = [
        (
            sample.cpu_usage_percent,
            CPU_CRITICAL_PERCENT,
            CPU_WARNING_PERCENT,
            "CPU usage is critical (>95%)",
            "CPU usage is high (>80%)",
        ),
        (
            sample.memory_usage_percent,
            MEMORY_CRITICAL_PERCENT,
            MEMORY_WARNING_PERCENT,
            "Memory usage is critical (>95%)",
            "Memory usage is high (>85%)",
        ),
        (
            sample.disk_usage_percent,
            DISK_CRITICAL_PERCENT,
            DISK_WARNING_PERCENT,
            "Disk usage is critical (>95%)",
            "Disk usage is high (>85%)",
        ),
    ];

    for (value, critical, warning, critical_msg, warning_msg) in checks {
        if value > critical {
            status = HealthStatus::Critical;
            warnings.push(critical_msg.to_string());
        } else if value > warning {
            if status != HealthStatus::Critical {
                status = HealthStatus::Warning;
            }
            warnings.push(warning_msg.to_string());
        }
    }

    HealthVerdict { status, warnings }
}
