//! # mlv-config
//!
//! Layered configuration loading for mlv using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MLV_*` prefix, `__` as separator)
//! 2. Project-level `.mlv/config.toml`
//! 3. User-level `~/.config/mlv/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MLV_DISPLAY__JSON_INDENT` -> `display.json_indent` and
//! `MLV_REGISTRY__DEFAULT_SEARCH_TYPE` -> `registry.default_search_type`.
//!
//! # Usage
//!
//! ```no_run
//! use mlv_config::MlvConfig;
//!
//! let config = MlvConfig::load_with_dotenv().expect("config");
//! println!("indent: {}", config.display.json_indent);
//! ```

mod display;
mod error;
mod registry;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MlvConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl MlvConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse and
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(error) => tracing::trace!(%error, "no .env loaded"),
        }
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
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

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".mlv/config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MLV_").split("__"))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mlv").join("config.toml"))
    }
}
