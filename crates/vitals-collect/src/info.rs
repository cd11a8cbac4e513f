//! Host identity and uptime

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Static host information plus uptime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub platform: String,
    pub platform_version: String,
    pub kernel_version: String,
    pub kernel_arch: String,
    pub uptime_seconds: u64,
    pub uptime_human: String,
    /// Boot time as RFC 3339.
    pub boot_time: String,
    /// Number of processes currently known to the kernel.
    pub procs: usize,
}

/// Collect host information from sysinfo.
pub fn collect_system_info() -> SystemInfo {
    let mut sys = System::new();
    sys.refresh_processes(sysinfo::ProcessesToUpdate::All, true);

    let uptime = uptime_seconds();
    let boot_time = DateTime::<Utc>::from_timestamp(System::boot_time() as i64, 0)
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    SystemInfo {
        hostname: hostname(),
        os: std::env::consts::OS.to_string(),
        platform: System::name().unwrap_or_else(|| "unknown".to_string()),
        platform_version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
        kernel_version: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
        kernel_arch: std::env::consts::ARCH.to_string(),
        uptime_seconds: uptime,
        uptime_human: format_duration(uptime),
        boot_time,
        procs: sys.processes().len(),
    }
}

/// Host uptime in seconds.
pub fn uptime_seconds() -> u64 {
    System::uptime()
}

/// Hostname, `unknown` when the kernel reports none.
pub fn hostname() -> String {
    System::host_name().unwrap_or_else(|| "unknown".to_string())
}

/// Format a duration in whole seconds as `1d 2h 3m 4s`, omitting leading
/// zero components.
pub fn format_duration(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 || !parts.is_empty() {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 || !parts.is_empty() {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));
    parts.join(" ")
}
