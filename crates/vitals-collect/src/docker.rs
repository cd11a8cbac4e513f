//! Docker container metrics via `docker ps` and cgroup files
//!
//! Container discovery shells out to `docker ps --format '{{json .}}'`;
//! per-container CPU and memory come from the container's cgroup. Cgroup
//! v2 (`system.slice/docker-<id>.scope`) is tried first, then the v1
//! layout. Both are best-effort: missing files leave the stats absent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;
use vitals_core::{Error, Result};

const CGROUP_ROOT: &str = "/sys/fs/cgroup";

/// One `docker ps` row (Go-template JSON field names).
#[derive(Debug, Clone, Deserialize)]
pub struct PsLine {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Names")]
    pub names: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "State", default)]
    pub state: String,
}

/// Container CPU usage from the cgroup, all in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCpu {
    pub usage_usec: u64,
    pub user_usec: Option<u64>,
    pub system_usec: Option<u64>,
}

/// Container memory usage from the cgroup.
///
/// Under cgroup v2 `file` maps to cache and `anon` to rss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerMemory {
    pub current_bytes: u64,
    pub cache_bytes: Option<u64>,
    pub rss_bytes: Option<u64>,
}

/// Metrics for one container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub container_id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub running: bool,
    pub cpu: Option<ContainerCpu>,
    pub memory: Option<ContainerMemory>,
}

/// Parse one `docker ps --format '{{json .}}'` line.
pub fn parse_ps_line(line: &str) -> Option<PsLine> {
    serde_json::from_str(line.trim()).ok()
}

/// Parse flat-keyed cgroup files (`cpu.stat`, `memory.stat`): one
/// `key value` pair per line.
pub fn parse_flat_keyed(content: &str) -> HashMap<String, u64> {
    content
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(' ')?;
            Some((key.to_string(), value.trim().parse::<u64>().ok()?))
        })
        .collect()
}

fn read_u64(path: &Path) -> Option<u64> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// Read container CPU stats from a cgroup root, v2 first then v1.
pub fn read_container_cpu(cgroup_root: &Path, container_id: &str) -> Option<ContainerCpu> {
    // cgroup v2
    let v2 = cgroup_v2_path(cgroup_root, container_id).join("cpu.stat");
    if let Ok(content) = std::fs::read_to_string(&v2) {
        let stats = parse_flat_keyed(&content);
        return Some(ContainerCpu {
            usage_usec: *stats.get("usage_usec")?,
            user_usec: stats.get("user_usec").copied(),
            system_usec: stats.get("system_usec").copied(),
        });
    }

    // cgroup v1: cpuacct.usage is nanoseconds; user/system are in USER_HZ
    // ticks and not comparable, so they stay absent
    let v1 = cgroup_root
        .join("cpuacct")
        .join("docker")
        .join(container_id)
        .join("cpuacct.usage");
    read_u64(&v1).map(|ns| ContainerCpu {
        usage_usec: ns / 1_000,
        user_usec: None,
        system_usec: None,
    })
}

/// Read container memory stats from a cgroup root, v2 first then v1.
pub fn read_container_memory(cgroup_root: &Path, container_id: &str) -> Option<ContainerMemory> {
    // cgroup v2
    let v2_dir = cgroup_v2_path(cgroup_root, container_id);
    if let Some(current) = read_u64(&v2_dir.join("memory.current")) {
        let stats = std::fs::read_to_string(v2_dir.join("memory.stat"))
            .map(|c| parse_flat_keyed(&c))
            .unwrap_or_default();
        return Some(ContainerMemory {
            current_bytes: current,
            cache_bytes: stats.get("file").copied(),
            rss_bytes: stats.get("anon").copied(),
        });
    }

    // cgroup v1
    let v1_dir = cgroup_root.join("memory").join("docker").join(container_id);
    let current = read_u64(&v1_dir.join("memory.usage_in_bytes"))?;
    let stats = std::fs::read_to_string(v1_dir.join("memory.stat"))
        .map(|c| parse_flat_keyed(&c))
        .unwrap_or_default();
    Some(ContainerMemory {
        current_bytes: current,
        cache_bytes: stats.get("cache").copied(),
        rss_bytes: stats.get("rss").copied(),
    })
}

fn cgroup_v2_path(cgroup_root: &Path, container_id: &str) -> PathBuf {
    cgroup_root
        .join("system.slice")
        .join(format!("docker-{}.scope", container_id))
}

/// List running containers via `docker ps`.
pub async fn list_containers() -> Result<Vec<PsLine>> {
    let output = Command::new("docker")
        .args(["ps", "--no-trunc", "--format", "{{json .}}"])
        .output()
        .await
        .map_err(|e| Error::unavailable(format!("docker not available: {}", e)))?;

    if !output.status.success() {
        return Err(Error::command(
            "docker ps",
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(parse_ps_line)
        .collect())
}

/// Collect container metrics, optionally filtered by container id or name.
pub async fn collect_docker_metrics(filter: Option<&str>) -> Result<Vec<ContainerMetrics>> {
    let containers = list_containers().await?;
    let cgroup_root = Path::new(CGROUP_ROOT);

    let mut result = Vec::new();
    for c in containers {
        if let Some(wanted) = filter {
            if c.id != wanted && c.names != wanted {
                continue;
            }
        }

        let cpu = read_container_cpu(cgroup_root, &c.id);
        let memory = read_container_memory(cgroup_root, &c.id);
        if cpu.is_none() && memory.is_none() {
            debug!(container = %c.id, "no cgroup stats readable");
        }

        result.push(ContainerMetrics {
            running: c.state.eq_ignore_ascii_case("running") || c.status.starts_with("Up"),
            container_id: c.id,
            name: c.names,
            image: c.image,
            status: c.status,
            cpu,
            memory,
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_docker_ps_json_line() {
        let line = r#"{"ID":"abc123","Names":"web","Image":"nginx:latest","Status":"Up 2 hours","State":"running"}"#;
        let ps = parse_ps_line(line).unwrap();
        assert_eq!(ps.id, "abc123");
        assert_eq!(ps.names, "web");
        assert_eq!(ps.image, "nginx:latest");
        assert_eq!(ps.state, "running");

        assert!(parse_ps_line("not json").is_none());
    }

    #[test]
    fn parses_flat_keyed_stat_file() {
        let stats = parse_flat_keyed("usage_usec 4200\nuser_usec 3000\nsystem_usec 1200\n");
        assert_eq!(stats["usage_usec"], 4200);
        assert_eq!(stats["user_usec"], 3000);
        assert_eq!(stats.len(), 3);

        // Malformed lines are dropped
        let partial = parse_flat_keyed("anon 100\nbroken\nfile abc\n");
        assert_eq!(partial.len(), 1);
        assert_eq!(partial["anon"], 100);
    }

    #[test]
    fn reads_cgroup_v2_layout() {
        let root = tempfile::tempdir().unwrap();
        let scope = root.path().join("system.slice").join("docker-abc.scope");
        std::fs::create_dir_all(&scope).unwrap();
        std::fs::write(
            scope.join("cpu.stat"),
            "usage_usec 5000\nuser_usec 4000\nsystem_usec 1000\n",
        )
        .unwrap();
        std::fs::write(scope.join("memory.current"), "2048\n").unwrap();
        std::fs::write(scope.join("memory.stat"), "anon 1024\nfile 512\n").unwrap();

        let cpu = read_container_cpu(root.path(), "abc").unwrap();
        assert_eq!(cpu.usage_usec, 5000);
        assert_eq!(cpu.user_usec, Some(4000));
        assert_eq!(cpu.system_usec, Some(1000));

        let memory = read_container_memory(root.path(), "abc").unwrap();
        assert_eq!(memory.current_bytes, 2048);
        assert_eq!(memory.cache_bytes, Some(512));
        assert_eq!(memory.rss_bytes, Some(1024));
    }

    #[test]
    fn falls_back_to_cgroup_v1_layout() {
        let root = tempfile::tempdir().unwrap();
        let cpu_dir = root.path().join("cpuacct").join("docker").join("abc");
        let mem_dir = root.path().join("memory").join("docker").join("abc");
        std::fs::create_dir_all(&cpu_dir).unwrap();
        std::fs::create_dir_all(&mem_dir).unwrap();
        std::fs::write(cpu_dir.join("cpuacct.usage"), "5000000\n").unwrap();
        std::fs::write(mem_dir.join("memory.usage_in_bytes"), "4096\n").unwrap();
        std::fs::write(mem_dir.join("memory.stat"), "cache 256\nrss 512\n").unwrap();

        let cpu = read_container_cpu(root.path(), "abc").unwrap();
        assert_eq!(cpu.usage_usec, 5000);
        assert_eq!(cpu.user_usec, None);

        let memory = read_container_memory(root.path(), "abc").unwrap();
        assert_eq!(memory.current_bytes, 4096);
        assert_eq!(memory.cache_bytes, Some(256));
        assert_eq!(memory.rss_bytes, Some(512));
    }

    #[test]
    fn missing_cgroup_yields_none() {
        let root = tempfile::tempdir().unwrap();
        assert!(read_container_cpu(root.path(), "nope").is_none());
        assert!(read_container_memory(root.path(), "nope").is_none());
    }
}
