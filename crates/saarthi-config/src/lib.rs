//! # saarthi-config
//!
//! Layered configuration loading for Saarthi using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SAARTHI_*` prefix, `__` as separator)
//! 2. Project-level `.saarthi/config.toml`
//! 3. User-level `~/.config/saarthi/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SAARTHI_AUTH__SIMULATED_DELAY_MS` -> `auth.simulated_delay_ms`,
//! `SAARTHI_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use saarthi_config::SaarthiConfig;
//!
//! let config = SaarthiConfig::load_with_dotenv().expect("config");
//! println!("login delay: {:?}", config.auth.simulated_delay());
//! ```

mod auth;
mod error;
mod general;

pub use auth::{AuthConfig, MAX_SIMULATED_DELAY_MS};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SaarthiConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SaarthiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".saarthi/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SAARTHI_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.simulated_delay_ms > MAX_SIMULATED_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "auth.simulated_delay_ms".into(),
                reason: format!(
                    "{} exceeds the {MAX_SIMULATED_DELAY_MS} ms limit",
                    self.auth.simulated_delay_ms
                ),
            });
        }

        let format = self.general.default_format.to_ascii_lowercase();
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.general.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("saarthi").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SaarthiConfig::default();
        assert_eq!(config.auth.simulated_delay_ms, 1000);
        assert!(config.auth.demo_accounts);
        assert_eq!(config.general.default_format, "json");
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(SaarthiConfig::default().validate().is_ok());
    }

    #[test]
    fn oversized_delay_is_rejected() {
        let mut config = SaarthiConfig::default();
        config.auth.simulated_delay_ms = MAX_SIMULATED_DELAY_MS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("auth.simulated_delay_ms"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let mut config = SaarthiConfig::default();
        config.general.default_format = "xml".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_format"));
    }
}
