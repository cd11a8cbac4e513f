//! RAM and swap usage

use serde::{Deserialize, Serialize};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// RAM counters in bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RamMetrics {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f64,
}

/// Swap counters in bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwapMetrics {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f64,
}

/// Memory snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub ram: RamMetrics,
    pub swap: SwapMetrics,
}

/// Percentage of `used` within `total`, 0.0 when total is zero.
pub fn usage_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

/// Collect RAM and swap usage.
pub fn collect_memory_metrics() -> MemoryMetrics {
    let sys = System::new_with_specifics(
        RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
    );

    MemoryMetrics {
        ram: RamMetrics {
            total_bytes: sys.total_memory(),
            available_bytes: sys.available_memory(),
            used_bytes: sys.used_memory(),
            free_bytes: sys.free_memory(),
            usage_percent: usage_percent(sys.used_memory(), sys.total_memory()),
        },
        swap: SwapMetrics {
            total_bytes: sys.total_swap(),
            used_bytes: sys.used_swap(),
            free_bytes: sys.free_swap(),
            usage_percent: usage_percent(sys.used_swap(), sys.total_swap()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_percent_handles_zero_total() {
        assert_eq!(usage_percent(10, 0), 0.0);
        assert_eq!(usage_percent(0, 100), 0.0);
        assert_eq!(usage_percent(50, 100), 50.0);
    }

    #[test]
    fn collect_reports_nonzero_ram() {
        let metrics = collect_memory_metrics();
        assert!(metrics.ram.total_bytes > 0);
        assert!(metrics.ram.usage_percent >= 0.0);
        assert!(metrics.ram.usage_percent <= 100.0);
    }
}
