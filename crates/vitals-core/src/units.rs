//! Unit conversion helpers: byte sizes and temperatures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::Error;

/// Temperature unit requested by configuration or per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "celsius",
            TempUnit::Fahrenheit => "fahrenheit",
            TempUnit::Kelvin => "kelvin",
        }
    }
}

impl std::fmt::Display for TempUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TempUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "celsius" => Ok(TempUnit::Celsius),
            "fahrenheit" => Ok(TempUnit::Fahrenheit),
            "kelvin" => Ok(TempUnit::Kelvin),
            other => Err(Error::InvalidConfig(format!(
                "invalid temp unit: {} (must be celsius, fahrenheit, or kelvin)",
                other
            ))),
        }
    }
}

/// Convert a Celsius reading into a map keyed by unit name.
///
/// Celsius is always present; the requested unit is added alongside it when
/// it differs, so callers can pass the map through to JSON unmodified.
pub fn convert_temperature(celsius: f64, unit: TempUnit) -> BTreeMap<&'static str, f64> {
    let mut result = BTreeMap::new();
    result.insert("celsius", celsius);

    match unit {
        TempUnit::Fahrenheit => {
            result.insert("fahrenheit", celsius * 9.0 / 5.0 + 32.0);
        }
        TempUnit::Kelvin => {
            result.insert("kelvin", celsius + 273.15);
        }
        TempUnit::Celsius => {}
    }

    result
}

/// Format a byte count with binary (1024) unit prefixes.
pub fn bytes_to_human(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let prefixes = ['K', 'M', 'G', 'T', 'P', 'E'];
    format!("{:.1} {}B", bytes as f64 / div as f64, prefixes[exp])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_to_human_scales() {
        assert_eq!(bytes_to_human(500), "500 B");
        assert_eq!(bytes_to_human(1024), "1.0 KB");
        assert_eq!(bytes_to_human(1536), "1.5 KB");
        assert_eq!(bytes_to_human(1024 * 1024), "1.0 MB");
        assert_eq!(bytes_to_human(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(bytes_to_human(5 * 1024 * 1024 * 1024 * 1024), "5.0 TB");
    }

    #[test]
    fn temperature_fahrenheit() {
        let temps = convert_temperature(100.0, TempUnit::Fahrenheit);
        assert_eq!(temps["celsius"], 100.0);
        assert_eq!(temps["fahrenheit"], 212.0);
    }

    #[test]
    fn temperature_kelvin() {
        let temps = convert_temperature(100.0, TempUnit::Kelvin);
        assert_eq!(temps["kelvin"], 373.15);
    }

    #[test]
    fn temperature_celsius_has_no_extra_keys() {
        let temps = convert_temperature(42.5, TempUnit::Celsius);
        assert_eq!(temps.len(), 1);
        assert_eq!(temps["celsius"], 42.5);
    }

    #[test]
    fn temp_unit_parses_case_insensitive() {
        assert_eq!("Celsius".parse::<TempUnit>().unwrap(), TempUnit::Celsius);
        assert_eq!(
            "FAHRENHEIT".parse::<TempUnit>().unwrap(),
            TempUnit::Fahrenheit
        );
        assert!("rankine".parse::<TempUnit>().is_err());
    }
}
