//! Socket tables from /proc/net
//!
//! Reads `/proc/net/{tcp,tcp6,udp,udp6}`. Addresses are stored as
//! byte-reversed hex of the network-order value; ports are plain
//! big-endian hex. PID attribution is a best-effort scan of
//! `/proc/<pid>/fd` for `socket:[inode]` links and yields null where the
//! scan is not permitted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;
use vitals_core::{Error, Result};

/// Connection kind filter. Unknown strings fall back to `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnKind {
    Tcp,
    Udp,
    #[default]
    All,
}

impl ConnKind {
    pub fn from_str_opt(s: Option<&str>) -> Self {
        match s.map(str::to_ascii_lowercase).as_deref() {
            Some("tcp") => ConnKind::Tcp,
            Some("udp") => ConnKind::Udp,
            _ => ConnKind::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnKind::Tcp => "tcp",
            ConnKind::Udp => "udp",
            ConnKind::All => "all",
        }
    }

    fn tables(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ConnKind::Tcp => &[("tcp", "/proc/net/tcp"), ("tcp", "/proc/net/tcp6")],
            ConnKind::Udp => &[("udp", "/proc/net/udp"), ("udp", "/proc/net/udp6")],
            ConnKind::All => &[
                ("tcp", "/proc/net/tcp"),
                ("tcp", "/proc/net/tcp6"),
                ("udp", "/proc/net/udp"),
                ("udp", "/proc/net/udp6"),
            ],
        }
    }
}

/// One socket-table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// `tcp` or `udp`.
    pub protocol: String,
    pub local_addr: String,
    /// Empty string when the socket has no remote endpoint.
    pub remote_addr: String,
    pub status: String,
    pub uid: u32,
    pub pid: Option<u32>,
    #[serde(skip)]
    pub inode: u64,
}

/// Map a TCP state code to its name. UDP sockets report `NONE`.
pub fn tcp_state_name(code: u8) -> &'static str {
    match code {
        0x01 => "ESTABLISHED",
        0x02 => "SYN_SENT",
        0x03 => "SYN_RECV",
        0x04 => "FIN_WAIT1",
        0x05 => "FIN_WAIT2",
        0x06 => "TIME_WAIT",
        0x07 => "CLOSE",
        0x08 => "CLOSE_WAIT",
        0x09 => "LAST_ACK",
        0x0A => "LISTEN",
        0x0B => "CLOSING",
        0x0C => "NEW_SYN_RECV",
        _ => "UNKNOWN",
    }
}

/// Decode a `/proc/net` address field (`0100007F:1F90` or the 32-hex-char
/// IPv6 form) into `ip:port`. Returns None for malformed input.
pub fn parse_proc_addr(field: &str) -> Option<(IpAddr, u16)> {
    let (addr_hex, port_hex) = field.split_once(':')?;
    let port = u16::from_str_radix(port_hex, 16).ok()?;

    let ip = match addr_hex.len() {
        8 => {
            let value = u32::from_str_radix(addr_hex, 16).ok()?;
            IpAddr::V4(Ipv4Addr::from(value.swap_bytes()))
        }
        32 => {
            let mut bytes = [0u8; 16];
            for (i, chunk) in addr_hex.as_bytes().chunks(8).enumerate() {
                let group = std::str::from_utf8(chunk).ok()?;
                let value = u32::from_str_radix(group, 16).ok()?.swap_bytes();
                bytes[i * 4..i * 4 + 4].copy_from_slice(&value.to_be_bytes());
            }
            IpAddr::V6(Ipv6Addr::from(bytes))
        }
        _ => return None,
    };

    Some((ip, port))
}

/// Parse one socket-table data row. Returns None for the header and
/// malformed lines.
pub fn parse_socket_line(protocol: &str, line: &str) -> Option<Connection> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 10 || !fields[0].ends_with(':') {
        return None;
    }

    let (local_ip, local_port) = parse_proc_addr(fields[1])?;
    let (remote_ip, remote_port) = parse_proc_addr(fields[2])?;
    let state_code = u8::from_str_radix(fields[3], 16).ok()?;
    let uid = fields[7].parse::<u32>().ok()?;
    let inode = fields[9].parse::<u64>().ok()?;

    let remote_addr = if remote_ip.is_unspecified() && remote_port == 0 {
        String::new()
    } else {
        format!("{}:{}", remote_ip, remote_port)
    };

    Some(Connection {
        protocol: protocol.to_string(),
        local_addr: format!("{}:{}", local_ip, local_port),
        remote_addr,
        status: if protocol == "udp" {
            "NONE".to_string()
        } else {
            tcp_state_name(state_code).to_string()
        },
        uid,
        pid: None,
        inode,
    })
}

/// Build a socket-inode to PID map by scanning `/proc/<pid>/fd`.
///
/// Entries we cannot read (other users' processes without privilege) are
/// skipped.
pub fn socket_inode_map() -> HashMap<u64, u32> {
    let mut map = HashMap::new();
    let Ok(entries) = std::fs::read_dir("/proc") else {
        return map;
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(pid) = name.to_str().and_then(|n| n.parse::<u32>().ok()) else {
            continue;
        };
        let fd_dir = Path::new("/proc").join(name).join("fd");
        let Ok(fds) = std::fs::read_dir(&fd_dir) else {
            continue;
        };
        for fd in fds.flatten() {
            if let Ok(target) = std::fs::read_link(fd.path()) {
                if let Some(inode) = target
                    .to_str()
                    .and_then(|t| t.strip_prefix("socket:["))
                    .and_then(|t| t.strip_suffix(']'))
                    .and_then(|t| t.parse::<u64>().ok())
                {
                    map.insert(inode, pid);
                }
            }
        }
    }

    map
}

/// Collect socket-table rows for the requested kind, with optional
/// upper-cased status filter. Blocking (scans /proc); run under
/// `spawn_blocking` from async contexts.
pub fn collect_connections(kind: ConnKind, status_filter: Option<&str>) -> Result<Vec<Connection>> {
    let inode_map = socket_inode_map();
    let filter = status_filter.map(str::to_ascii_uppercase);

    let mut connections = Vec::new();
    let mut readable_tables = 0;
    for &(protocol, path) in kind.tables() {
        // An absent table (no IPv6 stack) is fine as long as some table reads
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };
        readable_tables += 1;
        for line in content.lines() {
            let Some(mut conn) = parse_socket_line(protocol, line) else {
                continue;
            };
            if let Some(ref wanted) = filter {
                if conn.status != *wanted {
                    continue;
                }
            }
            conn.pid = inode_map.get(&conn.inode).copied();
            connections.push(conn);
        }
    }

    if readable_tables == 0 {
        return Err(Error::unavailable("/proc/net socket tables"));
    }

    Ok(connections)
}
