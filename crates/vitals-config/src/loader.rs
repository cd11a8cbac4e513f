//! Configuration file loading
//!
//! - [`load_config`] - strict loader, errors if the file is missing
//! - [`write_default_config`] - creates a default config file (`vitals init`)
//!
//! A missing file at the default location is not an error for callers that
//! treat config as optional; they match on [`ConfigError::NotFound`].

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::DEFAULT_CONFIG_FILENAME;
use crate::Config;

/// Default configuration template written by `vitals init`.
pub const DEFAULT_CONFIG: &str = r#"# vitals configuration

[metrics]
# Temperature unit for CPU/GPU readings: celsius, fahrenheit, or kelvin
temp_unit = "celsius"
# Process-list size (clamped to 1..=50)
max_processes = 10
# Mount points to report; empty = all real filesystems
mount_points = []
# Interfaces to report; empty = all non-loopback interfaces
interfaces = []
# Probe vcgencmd for GPU temperature / throttle flags (Raspberry Pi)
enable_gpu = true

[log]
level = "info"
"#;

/// Errors that can occur during config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}. Run 'vitals init' to create a default config.")]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] vitals_core::Error),
}

/// Resolve a config path, preferring an existing file.
///
/// If the given path exists it is used as-is. The bare default filename is
/// additionally looked up under `$HOME/.config/vitals/`; when neither
/// location exists the home path is returned as the canonical place for
/// `vitals init` to create it.
pub fn resolve_config_path(path: &Path) -> PathBuf {
    if path.exists() {
        debug!(path = %path.display(), "config path exists, using as-is");
        return path.to_path_buf();
    }

    if path == Path::new(DEFAULT_CONFIG_FILENAME) {
        let home_config = default_config_path();
        debug!(path = %home_config.display(), "using config home path");
        return home_config;
    }

    path.to_path_buf()
}

/// Canonical config location under the user's home directory.
pub fn default_config_path() -> PathBuf {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".config").join("vitals").join(DEFAULT_CONFIG_FILENAME)
}

/// Load and validate configuration from a TOML file (strict, no side effects).
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let resolved = resolve_config_path(path);
    if !resolved.exists() {
        return Err(ConfigError::NotFound(resolved));
    }

    debug!(path = %resolved.display(), "loading config file");
    let content = std::fs::read_to_string(&resolved)?;
    let mut config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Write the default config template to `path` unless it already exists.
///
/// Returns the path written (or found). Parent directories are created.
pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_parses_and_validates() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.validate().unwrap();
        assert_eq!(config.metrics.max_processes, 10);
    }

    #[test]
    fn load_config_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        match load_config(&path) {
            Err(ConfigError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn load_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitals.toml");
        std::fs::write(&path, "[metrics]\nmax_processes = 99\n").unwrap();

        let config = load_config(&path).unwrap();
        // Clamp applied during load
        assert_eq!(config.metrics.max_processes, 50);
    }

    #[test]
    fn write_default_config_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("vitals.toml");

        let written = write_default_config(&path).unwrap();
        assert_eq!(written, path);
        std::fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        // Second call must not overwrite
        write_default_config(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("debug"));
    }
}
