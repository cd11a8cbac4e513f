//! Process listing with sort and limit

use serde::{Deserialize, Serialize};
use sysinfo::{ProcessesToUpdate, System};
use vitals_core::SortBy;

/// One process row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub rss_bytes: u64,
    pub status: String,
    /// Process start time, seconds since the epoch.
    pub start_time: u64,
}

/// Sorted, limited process list plus totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessList {
    pub processes: Vec<ProcessInfo>,
    pub total: usize,
    pub shown: usize,
    pub sort_by: SortBy,
}

/// Sort rows in place: CPU and memory descending, PID ascending.
pub fn sort_processes(processes: &mut [ProcessInfo], sort_by: SortBy) {
    match sort_by {
        SortBy::Memory => processes.sort_by(|a, b| {
            b.memory_percent
                .partial_cmp(&a.memory_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortBy::Pid => processes.sort_by_key(|p| p.pid),
        SortBy::Cpu => processes.sort_by(|a, b| {
            b.cpu_percent
                .partial_cmp(&a.cpu_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
}

/// Collect the process list.
///
/// CPU percentages are deltas, so this refreshes twice with sysinfo's
/// minimum update interval in between. Blocking; run under
/// `spawn_blocking` from async contexts.
pub fn collect_processes(limit: usize, sort_by: SortBy) -> ProcessList {
    let mut sys = System::new_all();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_processes(ProcessesToUpdate::All, true);

    let total_memory = sys.total_memory();
    let mut processes: Vec<ProcessInfo> = sys
        .processes()
        .values()
        .map(|p| ProcessInfo {
            pid: p.pid().as_u32(),
            name: p.name().to_string_lossy().into_owned(),
            cpu_percent: f64::from(p.cpu_usage()),
            memory_percent: if total_memory == 0 {
                0.0
            } else {
                p.memory() as f64 / total_memory as f64 * 100.0
            },
            rss_bytes: p.memory(),
            status: p.status().to_string(),
            start_time: p.start_time(),
        })
        .collect();

    let total = processes.len();
    sort_processes(&mut processes, sort_by);
    processes.truncate(limit);

    ProcessList {
        shown: processes.len(),
        processes,
        total,
        sort_by,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pid: u32, cpu: f64, memory: f64) -> ProcessInfo {
        ProcessInfo {
            pid,
            name: format!("proc{}", pid),
            cpu_percent: cpu,
            memory_percent: memory,
            rss_bytes: 0,
            status: "Run".to_string(),
            start_time: 0,
        }
    }

    #[test]
    fn sorts_by_cpu_descending() {
        let mut rows = vec![row(1, 1.0, 0.0), row(2, 9.0, 0.0), row(3, 5.0, 0.0)];
        sort_processes(&mut rows, SortBy::Cpu);
        let pids: Vec<u32> = rows.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn sorts_by_memory_descending() {
        let mut rows = vec![row(1, 0.0, 2.0), row(2, 0.0, 8.0), row(3, 0.0, 4.0)];
        sort_processes(&mut rows, SortBy::Memory);
        let pids: Vec<u32> = rows.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn sorts_by_pid_ascending() {
        let mut rows = vec![row(30, 0.0, 0.0), row(10, 0.0, 0.0), row(20, 0.0, 0.0)];
        sort_processes(&mut rows, SortBy::Pid);
        let pids: Vec<u32> = rows.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![10, 20, 30]);
    }

    #[test]
    fn collect_respects_limit_and_totals() {
        let list = collect_processes(5, SortBy::Pid);
        assert!(list.shown <= 5);
        assert_eq!(list.shown, list.processes.len());
        assert!(list.total >= list.shown);
        assert_eq!(list.sort_by, SortBy::Pid);
    }
}
