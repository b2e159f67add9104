//! # rota-config
//!
//! Layered configuration loading for Rota using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROTA_*` prefix, `__` as separator)
//! 2. Project-level `.rota/config.toml`
//! 3. User-level `~/.config/rota/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROTA_STORAGE__PROFILES_PATH` -> `storage.profiles_path`,
//! `ROTA_SCHEDULE__SEED` -> `schedule.seed`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rota_config::RotaConfig;
//!
//! let config = RotaConfig::load_with_dotenv().expect("config");
//! println!("profiles live at {}", config.storage.resolved_profiles_path().display());
//! ```

mod error;
mod general;
mod schedule;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use schedule::ScheduleConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RotaConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RotaConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` (current directory or a parent) before [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".rota/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ROTA_").split("__"))
    }

    /// Reject values that would make the output unreadable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.placeholder_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.placeholder_label".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rota").join("config.toml"))
    }
}
