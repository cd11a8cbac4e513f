//! Host metric acquisition for vitals
//!
//! Every collector is external-collaborator glue: a call into `sysinfo`, a
//! read of `/proc` or `/sys`, or a platform utility (`systemctl`,
//! `vcgencmd`, `docker`). Parsing is kept in pure functions so it can be
//! tested without the host; I/O wrappers stay thin.
//!
//! Collectors that block (CPU sampling has a minimum update interval,
//! `/proc` scans touch many files) are synchronous and expected to run
//! under `tokio::task::spawn_blocking`; subprocess probes are `async` via
//! `tokio::process`.

pub mod conn;
pub mod cpu;
pub mod disk;
pub mod diskio;
pub mod docker;
pub mod info;
pub mod memory;
pub mod net;
pub mod process;
pub mod service;
pub mod thermal;

pub use conn::{collect_connections, ConnKind, Connection};
pub use cpu::{collect_cpu_metrics, CpuMetrics};
pub use disk::{collect_disk_usage, DiskUsage};
pub use diskio::{collect_disk_io, DiskIoStats};
pub use docker::{collect_docker_metrics, ContainerMetrics};
pub use info::{collect_system_info, SystemInfo};
pub use memory::{collect_memory_metrics, MemoryMetrics};
pub use net::{collect_net_metrics, InterfaceMetrics};
pub use process::{collect_processes, ProcessInfo, ProcessList};
pub use service::{query_service, ServiceStatus};
pub use thermal::{collect_thermal_status, ThermalStatus, ThrottleFlags};
