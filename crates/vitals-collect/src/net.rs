//! Network interface counters and addresses
//!
//! Counters come from `/proc/net/dev` (the only portable-on-Linux source
//! that includes drop counts); MAC and IP addresses come from sysinfo's
//! interface list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use sysinfo::Networks;
use vitals_core::{Error, Result};

const NET_DEV_PATH: &str = "/proc/net/dev";

/// Counters and addresses for one interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMetrics {
    pub interface: String,
    pub bytes_recv: u64,
    pub packets_recv: u64,
    pub errors_in: u64,
    pub drops_in: u64,
    pub bytes_sent: u64,
    pub packets_sent: u64,
    pub errors_out: u64,
    pub drops_out: u64,
    pub mac_address: Option<String>,
    pub ip_addresses: Vec<String>,
}

/// Parse one `/proc/net/dev` data line (`eth0: 1234 10 0 0 ...`).
///
/// Returns None for the two header lines and anything malformed.
pub fn parse_net_dev_line(line: &str) -> Option<InterfaceMetrics> {
    let (name, counters) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let fields: Vec<u64> = counters
        .split_whitespace()
        .map(|f| f.parse::<u64>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    // 8 receive + 8 transmit columns
    if fields.len() < 16 {
        return None;
    }

    Some(InterfaceMetrics {
        interface: name.to_string(),
        bytes_recv: fields[0],
        packets_recv: fields[1],
        errors_in: fields[2],
        drops_in: fields[3],
        bytes_sent: fields[8],
        packets_sent: fields[9],
        errors_out: fields[10],
        drops_out: fields[11],
        mac_address: None,
        ip_addresses: Vec::new(),
    })
}

/// Decide whether an interface is reported for the given filter.
///
/// Loopback is skipped unless explicitly requested; a non-empty filter
/// restricts output to the named interfaces.
pub fn interface_selected(name: &str, filter: &[String]) -> bool {
    if name == "lo" && !filter.iter().any(|f| f == "lo") {
        return false;
    }
    filter.is_empty() || filter.iter().any(|f| f == name)
}

/// Collect interface counters, enriched with MAC and IP addresses.
pub fn collect_net_metrics(interfaces: &[String]) -> Result<Vec<InterfaceMetrics>> {
    let content = std::fs::read_to_string(NET_DEV_PATH)
        .map_err(|e| Error::unavailable(format!("{}: {}", NET_DEV_PATH, e)))?;

    let networks = Networks::new_with_refreshed_list();
    let mut addresses: HashMap<String, (String, Vec<String>)> = HashMap::new();
    for (name, data) in networks.iter() {
        let ips = data
            .ip_networks()
            .iter()
            .map(|ip| format!("{}/{}", ip.addr, ip.prefix))
            .collect();
        addresses.insert(name.clone(), (data.mac_address().to_string(), ips));
    }

    let mut result: Vec<InterfaceMetrics> = content
        .lines()
        .filter_map(parse_net_dev_line)
        .filter(|m| interface_selected(&m.interface, interfaces))
        .collect();

    for metrics in &mut result {
        if let Some((mac, ips)) = addresses.remove(&metrics.interface) {
            // All-zero MAC means the kernel reports no hardware address
            if mac != "00:00:00:00:00:00" {
                metrics.mac_address = Some(mac);
            }
            metrics.ip_addresses = ips;
        }
    }

    result.sort_by(|a, b| a.interface.cmp(&b.interface));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LINE: &str =
        "  eth0: 98765432 123456 7 3 0 0 0 0 12345678 65432 1 2 0 0 0 0";

    #[test]
    fn parses_counter_line() {
        let metrics = parse_net_dev_line(SAMPLE_LINE).unwrap();
        assert_eq!(metrics.interface, "eth0");
        assert_eq!(metrics.bytes_recv, 98_765_432);
        assert_eq!(metrics.packets_recv, 123_456);
        assert_eq!(metrics.errors_in, 7);
        assert_eq!(metrics.drops_in, 3);
        assert_eq!(metrics.bytes_sent, 12_345_678);
        assert_eq!(metrics.packets_sent, 65_432);
        assert_eq!(metrics.errors_out, 1);
        assert_eq!(metrics.drops_out, 2);
    }

    #[test]
    fn header_lines_are_skipped() {
        assert!(parse_net_dev_line("Inter-|   Receive").is_none());
        assert!(parse_net_dev_line(
            " face |bytes    packets errs drop fifo frame compressed multicast|bytes"
        )
        .is_none());
    }

    #[test]
    fn loopback_skipped_unless_requested() {
        assert!(!interface_selected("lo", &[]));
        assert!(interface_selected("lo", &["lo".to_string()]));
        assert!(interface_selected("eth0", &[]));
        assert!(!interface_selected("eth0", &["wlan0".to_string()]));
        assert!(interface_selected("wlan0", &["wlan0".to_string()]));
    }
}
