//! Command-line configuration
//!
//! Defaults for the binaries, read from the environment, and log setup.

use tracing_subscriber::EnvFilter;

use crate::bac::units::BacUnit;
use crate::models::CountryCode;

/// Environment variable selecting the default country
pub const COUNTRY_ENV: &str = "SAFEBAC_COUNTRY";
/// Environment variable selecting the display unit
pub const DISPLAY_UNIT_ENV: &str = "SAFEBAC_DISPLAY_UNIT";

/// Directive applied on top of `RUST_LOG`
pub const LOG_DIRECTIVE: &str = "safebac=info";

/// Install the stderr log subscriber used by every binary
///
/// Logs go to stderr so stdout stays machine-readable. Fails if a global
/// subscriber is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .try_init()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub country: CountryCode,
    pub display_unit: BacUnit,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            country: CountryCode::Us,
            display_unit: BacUnit::Percent,
        }
    }
}

impl CliConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(COUNTRY_ENV).ok().as_deref(),
            std::env::var(DISPLAY_UNIT_ENV).ok().as_deref(),
        )
    }

    /// Build from raw values; unrecognized values keep the default
    pub fn from_vars(country: Option<&str>, display_unit: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = country {
            match CountryCode::from_str(raw) {
                Some(code) => config.country = code,
                None => tracing::warn!(
                    "Unknown {} '{}', using {}",
                    COUNTRY_ENV,
                    raw,
                    config.country.as_str()
                ),
            }
        }

        if let Some(raw) = display_unit {
            match BacUnit::from_str(raw) {
                Some(unit) => config.display_unit = unit,
                None => tracing::warn!(
                    "Unknown {} '{}', using {}",
                    DISPLAY_UNIT_ENV,
                    raw,
                    config.display_unit.as_str()
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(None, None);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.country, CountryCode::Us);
        assert_eq!(config.display_unit, BacUnit::Percent);
    }

    #[test]
    fn test_from_vars() {
        let config = CliConfig::from_vars(Some("nz"), Some("permille"));
        assert_eq!(config.country, CountryCode::Nz);
        assert_eq!(config.display_unit, BacUnit::Permille);
    }

    #[test]
    fn test_init_logging_installs_once() {
        // Whichever call wins installs the subscriber; later calls report it
        let _ = init_logging();
        assert!(init_logging().is_err());
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = CliConfig::from_vars(Some("XX"), Some("ppm"));
        assert_eq!(config, CliConfig::default());
    }
}
