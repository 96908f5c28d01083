//! # tone-config
//!
//! Layered configuration loading for Tone using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TONE_*` prefix, `__` as separator)
//! 2. Project-level `.tone/config.toml`
//! 3. User-level `~/.config/tone/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TONE_REMOTE__API_KEY` -> `remote.api_key`,
//! `TONE_GENERAL__INDUSTRY` -> `general.industry`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tone_config::ToneConfig;
//!
//! let config = ToneConfig::load().expect("config");
//!
//! if config.remote.is_configured() {
//!     println!("remote models at {}", config.remote.base_url);
//! }
//! ```

mod error;
mod general;
mod remote;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use remote::RemoteConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of every environment variable read by [`ToneConfig::figment`].
pub const ENV_PREFIX: &str = "TONE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToneConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl ToneConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling
    /// this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure and
    /// [`ConfigError::InvalidValue`] when validation rejects a value.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tone/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.remote.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tone").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use tone_core::Industry;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ToneConfig::default();
        assert!(!config.remote.is_configured());
        assert_eq!(config.general.industry, Industry::Finance);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = Figment::from(Serialized::defaults(ToneConfig::default()));
        let config = ToneConfig::from_figment(&figment).expect("should extract defaults");
        assert!(!config.remote.enabled);
        assert_eq!(config.remote.timeout_secs, 30);
        assert_eq!(config.general.export_dir, ".");
    }
}
