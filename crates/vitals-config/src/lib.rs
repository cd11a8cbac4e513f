//! Configuration for vitals
//!
//! Configuration is loaded once at startup (TOML file plus CLI overrides)
//! and passed into the server as an immutable value. Nothing here is
//! process-wide mutable state.

pub mod constants;
pub mod loader;
pub mod types;

pub use loader::{load_config, resolve_config_path, write_default_config, ConfigError};
pub use types::{Config, LogSection, MetricsSection};
