//! Block device I/O counters from /proc/diskstats
//!
//! Layout per line (fields 1-14, kernels since 2.6):
//! major minor name reads-completed reads-merged sectors-read time-reading
//! writes-completed writes-merged sectors-written time-writing in-flight
//! time-io weighted-time-io. Sector counts are in 512-byte units
//! regardless of the device's logical block size.

use serde::{Deserialize, Serialize};
use vitals_core::{Error, Result};

const DISKSTATS_PATH: &str = "/proc/diskstats";
const SECTOR_SIZE: u64 = 512;

/// I/O counters for one block device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskIoStats {
    pub device: String,
    pub read_count: u64,
    pub write_count: u64,
    pub read_bytes: u64,
    pub write_bytes: u64,
    /// Milliseconds spent reading.
    pub read_time_ms: u64,
    /// Milliseconds spent writing.
    pub write_time_ms: u64,
    /// Milliseconds spent doing I/O.
    pub io_time_ms: u64,
    /// Weighted milliseconds doing I/O.
    pub weighted_io_ms: u64,
    /// I/Os currently in progress.
    pub in_flight: u64,
}

/// Parse one `/proc/diskstats` line. Returns None for short lines.
pub fn parse_diskstats_line(line: &str) -> Option<DiskIoStats> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 14 {
        return None;
    }

    let num = |idx: usize| fields[idx].parse::<u64>().ok();

    Some(DiskIoStats {
        device: fields[2].to_string(),
        read_count: num(3)?,
        read_bytes: num(5)? * SECTOR_SIZE,
        read_time_ms: num(6)?,
        write_count: num(7)?,
        write_bytes: num(9)? * SECTOR_SIZE,
        write_time_ms: num(10)?,
        in_flight: num(11)?,
        io_time_ms: num(12)?,
        weighted_io_ms: num(13)?,
    })
}

/// Collect I/O counters, optionally restricted to the named devices.
pub fn collect_disk_io(devices: &[String]) -> Result<Vec<DiskIoStats>> {
    let content = std::fs::read_to_string(DISKSTATS_PATH)
        .map_err(|e| Error::unavailable(format!("{}: {}", DISKSTATS_PATH, e)))?;
    Ok(parse_diskstats(&content, devices))
}

fn parse_diskstats(content: &str, devices: &[String]) -> Vec<DiskIoStats> {
    content
        .lines()
        .filter_map(parse_diskstats_line)
        .filter(|stats| devices.is_empty() || devices.iter().any(|d| d == &stats.device))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
   8       0 sda 124412 9183 10421586 54644 86504 132122 7025712 129389 0 93696 184034 0 0 0 0 0 0
   8       1 sda1 124201 9102 10412002 54575 86000 131900 7020000 129000 0 93500 183500 0 0 0 0 0 0
 259       0 nvme0n1 841302 28 33536426 177547 508871 397679 23300026 776360 0 438280 965848 0 0 0 0 11941 11940
   7       0 loop0 52 0 2184 12 0 0 0 0 0 24 12 0 0 0 0 0 0";

    #[test]
    fn parses_standard_line() {
        let stats = parse_diskstats_line(
            "   8       0 sda 124412 9183 10421586 54644 86504 132122 7025712 129389 0 93696 184034",
        )
        .unwrap();
        assert_eq!(stats.device, "sda");
        assert_eq!(stats.read_count, 124412);
        assert_eq!(stats.read_bytes, 10421586 * 512);
        assert_eq!(stats.write_count, 86504);
        assert_eq!(stats.write_bytes, 7025712 * 512);
        assert_eq!(stats.read_time_ms, 54644);
        assert_eq!(stats.write_time_ms, 129389);
        assert_eq!(stats.in_flight, 0);
        assert_eq!(stats.io_time_ms, 93696);
        assert_eq!(stats.weighted_io_ms, 184034);
    }

    #[test]
    fn short_lines_are_skipped() {
        assert!(parse_diskstats_line("8 0 sda 1 2 3").is_none());
        assert!(parse_diskstats_line("").is_none());
    }

    #[test]
    fn empty_filter_returns_all_devices() {
        let all = parse_diskstats(SAMPLE, &[]);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn device_filter_restricts_results() {
        let filtered = parse_diskstats(SAMPLE, &["nvme0n1".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].device, "nvme0n1");
        assert_eq!(filtered[0].in_flight, 0);

        let none = parse_diskstats(SAMPLE, &["missing".to_string()]);
        assert!(none.is_empty());
    }
}
