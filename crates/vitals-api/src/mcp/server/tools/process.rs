//! Process list tool

use rmcp::ErrorData as McpError;
use std::sync::Arc;
use vitals_collect::{collect_processes, ProcessList};
use vitals_core::{clamp_process_limit, SortBy};

use super::run_blocking;
use crate::mcp::params::ProcessListParams;
use crate::state::ApiState;

/// Result of the process list tool.
pub struct ProcessListResult {
    pub list: ProcessList,
}

impl ProcessListResult {
    /// Build human-readable message for MCP response
    pub fn build_message(&self) -> String {
        format!(
            "Showing {} of {} processes sorted by {}",
            self.list.shown,
            self.list.total,
            self.list.sort_by.as_str()
        )
    }

    /// Build JSON response for MCP
    pub fn build_json(&self) -> serde_json::Value {
        serde_json::json!({
            "processes": self.list.processes,
            "total": self.list.total,
            "shown": self.list.shown,
            "sort_by": self.list.sort_by.as_str(),
        })
    }
}

/// Core process list implementation
pub async fn process_list_impl(
    state: &Arc<ApiState>,
    params: ProcessListParams,
) -> Result<ProcessListResult, McpError> {
    let limit = clamp_process_limit(params.limit, state.config.metrics.max_processes);
    let sort_by = SortBy::from_str_opt(params.sort_by.as_deref());

    let list = run_blocking(move || collect_processes(limit, sort_by)).await?;

    Ok(ProcessListResult { list })
}
