//! CLI command implementations

pub mod health;
pub mod init;
pub mod mcp;

use anyhow::{Context, Result};
use std::path::Path;
use vitals_config::{load_config, Config, ConfigError};
use vitals_core::TempUnit;

use crate::MetricOverrides;

/// Load the config file and apply CLI overrides.
///
/// A missing file at the default location is not an error (flags alone can
/// drive everything); a file that exists but does not parse is.
pub fn load_effective_config(path: &Path, overrides: &MetricOverrides) -> Result<Config> {
    let mut config = match load_config(path) {
        Ok(config) => config,
        Err(ConfigError::NotFound(path)) => {
            vitals_logging::debug!(path = %path.display(), "no config file, using defaults");
            Config::default()
        }
        Err(e) => return Err(e).context("failed to load config"),
    };

    if let Some(unit) = overrides.temp_unit.as_deref() {
        config.metrics.temp_unit = unit
            .parse::<TempUnit>()
            .context("invalid --temp-unit value")?;
    }
    if let Some(max) = overrides.max_processes {
        config.metrics.max_processes = max;
    }
    if let Some(mounts) = overrides.mount_points.as_deref() {
        config.metrics.mount_points = vitals_core::split_and_trim(mounts);
    }
    if let Some(interfaces) = overrides.interfaces.as_deref() {
        config.metrics.interfaces = vitals_core::split_and_trim(interfaces);
    }
    if let Some(enable_gpu) = overrides.enable_gpu {
        config.metrics.enable_gpu = enable_gpu;
    }

    config.validate().context("configuration error")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn overrides() -> MetricOverrides {
        MetricOverrides::default()
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let config =
            load_effective_config(Path::new("/no/such/vitals.toml"), &overrides()).unwrap();
        assert_eq!(config.metrics.max_processes, 10);
    }

    #[test]
    fn overrides_take_precedence_and_are_clamped() {
        let mut o = overrides();
        o.temp_unit = Some("kelvin".to_string());
        o.max_processes = Some(500);
        o.mount_points = Some("/, /home".to_string());

        let config = load_effective_config(Path::new("/no/such/vitals.toml"), &o).unwrap();
        assert_eq!(config.metrics.temp_unit, TempUnit::Kelvin);
        assert_eq!(config.metrics.max_processes, 50);
        assert_eq!(config.metrics.mount_points, vec!["/", "/home"]);
    }

    #[test]
    fn invalid_temp_unit_is_a_startup_error() {
        let mut o = overrides();
        o.temp_unit = Some("rankine".to_string());
        let err = load_effective_config(&PathBuf::from("/no/such/vitals.toml"), &o).unwrap_err();
        assert!(err.to_string().contains("temp-unit"));
    }
}
