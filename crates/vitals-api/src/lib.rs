//! MCP server layer for vitals
//!
//! Exposes host metrics as MCP tools. The wire protocol (JSON-RPC 2.0 over
//! stdio) is handled entirely by `rmcp`; this crate parses typed
//! parameters, calls the collectors, and shapes responses.

pub mod mcp;
pub mod state;

pub use mcp::VitalsServer;
pub use state::ApiState;
