//! Config initialization command

use anyhow::{Context, Result};
use std::path::Path;
use vitals_config::{resolve_config_path, write_default_config};

/// Write the default config file unless it already exists.
pub fn run(config_path: &Path) -> Result<()> {
    let resolved = resolve_config_path(config_path);
    let written = write_default_config(&resolved)
        .with_context(|| format!("failed to create config at {}", resolved.display()))?;
    println!("Config file: {}", written.display());
    Ok(())
}
