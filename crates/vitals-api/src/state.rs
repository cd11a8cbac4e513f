//! Shared server state

use vitals_config::Config;

/// Immutable state shared by all tool handlers.
///
/// Configuration is fixed at startup; handlers read it but never mutate it,
/// so concurrent tool calls need no coordination.
pub struct ApiState {
    pub config: Config,
}

impl ApiState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
