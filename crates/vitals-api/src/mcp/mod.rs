//! MCP (Model Context Protocol) server implementation
//!
//! Tools follow the same shape throughout: a typed parameter struct in
//! `params`, a `*_impl` function returning a `*Result` with
//! `build_message`/`build_json`, and a thin `#[tool]` wrapper in `server`.
//!
//! # Module Structure
//!
//! - `params` - Parameter types for all MCP tools
//! - `server` - VitalsServer with tool handlers
//! - `error` - Error conversion utilities

pub mod error;
pub mod params;
pub mod server;

pub use error::{OptionToMcpResult, ToMcpResult};
pub use params::{
    ConnectionsParams, CpuMetricsParams, DiskIoParams, DiskMetricsParams, DockerMetricsParams,
    NetworkMetricsParams, ProcessListParams, ServiceStatusParams, ThermalStatusParams,
};
pub use server::VitalsServer;
