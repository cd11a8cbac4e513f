//! Error types for the vitals core domain

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by metric acquisition and parsing.
///
/// Tool handlers map these onto MCP errors at the API boundary; optional
/// enrichments (temperatures, cgroup stats) swallow them into absent fields.
#[derive(Debug, Error)]
pub enum Error {
    /// The metric source is not present on this host (no thermal zone,
    /// no docker binary, unsupported platform).
    #[error("metric source unavailable: {0}")]
    Unavailable(String),

    /// A platform utility was invoked and failed.
    #[error("command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// Output from a utility or a /proc//sys file did not parse.
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a parse failure with a named source.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn unavailable(what: impl Into<String>) -> Self {
        Error::Unavailable(what.into())
    }

    pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
        Error::CommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }
}
