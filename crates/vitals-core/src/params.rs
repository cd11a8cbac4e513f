//! Parameter normalization shared by config and per-request arguments
//!
//! Request parameters arrive loosely typed from the MCP client; each helper
//! here is a pure function with explicit defaults and range clamps so the
//! policies are independently testable.

use serde::{Deserialize, Serialize};

/// Smallest accepted process-list limit.
pub const MIN_PROCESS_LIMIT: usize = 1;
/// Largest accepted process-list limit.
pub const MAX_PROCESS_LIMIT: usize = 50;
/// Limit applied when none is configured or requested.
pub const DEFAULT_PROCESS_LIMIT: usize = 10;

/// Clamp a requested process-list limit into [1, 50].
///
/// `None` falls back to the configured default (itself already clamped).
/// Out-of-range values are silently corrected rather than rejected; this is
/// a lenient-default policy, not validation.
pub fn clamp_process_limit(requested: Option<u64>, configured_default: usize) -> usize {
    match requested {
        Some(n) => (n as usize).clamp(MIN_PROCESS_LIMIT, MAX_PROCESS_LIMIT),
        None => configured_default.clamp(MIN_PROCESS_LIMIT, MAX_PROCESS_LIMIT),
    }
}

/// Split a comma-separated list, trimming whitespace and dropping empties.
pub fn split_and_trim(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Process list sort criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Cpu,
    Memory,
    Pid,
}

impl SortBy {
    /// Parse a sort key, falling back to CPU for unknown values.
    pub fn from_str_opt(s: Option<&str>) -> Self {
        match s.map(str::to_ascii_lowercase).as_deref() {
            Some("memory") => SortBy::Memory,
            Some("pid") => SortBy::Pid,
            _ => SortBy::Cpu,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Cpu => "cpu",
            SortBy::Memory => "memory",
            SortBy::Pid => "pid",
        }
    }
}
