//! MCP error handling utilities
//!
//! Extension traits for ergonomic conversion of collector errors into MCP
//! errors, reducing boilerplate in tool handlers.

use rmcp::ErrorData as McpError;

/// Extension trait for converting Results to MCP errors with context.
///
/// ```ignore
/// let io = collect_disk_io(&devices).mcp_context("Failed to get disk I/O stats")?;
/// ```
pub trait ToMcpResult<T> {
    /// Convert a Result to an MCP internal error with context message.
    fn mcp_context(self, context: &str) -> Result<T, McpError>;

    /// Convert a Result to an MCP invalid_params error with context message.
    fn mcp_invalid_params(self, context: &str) -> Result<T, McpError>;
}

impl<T, E: std::fmt::Display> ToMcpResult<T> for Result<T, E> {
    fn mcp_context(self, context: &str) -> Result<T, McpError> {
        self.map_err(|e| McpError::internal_error(format!("{}: {}", context, e), None))
    }

    fn mcp_invalid_params(self, context: &str) -> Result<T, McpError> {
        self.map_err(|e| McpError::invalid_params(format!("{}: {}", context, e), None))
    }
}

/// Extension trait for converting Options to MCP errors.
pub trait OptionToMcpResult<T> {
    /// Convert an Option to an MCP internal error if None.
    fn mcp_ok_or(self, context: &str) -> Result<T, McpError>;

    /// Convert an Option to an MCP invalid_params error if None.
    fn mcp_ok_or_invalid(self, context: &str) -> Result<T, McpError>;
}

impl<T> OptionToMcpResult<T> for Option<T> {
    fn mcp_ok_or(self, context: &str) -> Result<T, McpError> {
        self.ok_or_else(|| McpError::internal_error(context.to_string(), None))
    }

    fn mcp_ok_or_invalid(self, context: &str) -> Result<T, McpError> {
        self.ok_or_else(|| McpError::invalid_params(context.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mcp_context_passes_through_ok() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(result.mcp_context("ctx").unwrap(), 42);
    }

    #[test]
    fn mcp_context_wraps_err() {
        let result: Result<i32, &str> = Err("boom");
        let err = result.mcp_context("Failed to sample").unwrap_err();
        assert!(err.message.contains("Failed to sample"));
        assert!(err.message.contains("boom"));
    }

    #[test]
    fn option_ok_or_invalid() {
        let opt: Option<i32> = None;
        assert!(opt.mcp_ok_or_invalid("missing parameter").is_err());
        assert_eq!(Some(7).mcp_ok_or_invalid("missing").unwrap(), 7);
    }

    #[test]
    fn option_ok_or_internal() {
        let opt: Option<i32> = None;
        assert!(opt.mcp_ok_or("not found").is_err());
    }
}
