//! # verity-config
//!
//! Layered configuration loading for Verity using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERITY_*` prefix, `__` as separator)
//! 2. Project-level `.verity/config.toml`
//! 3. User-level `~/.config/verity/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERITY_API__BASE_URL` -> `api.base_url`,
//! `VERITY_HISTORY__CAPACITY` -> `history.capacity`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use verity_config::VerityConfig;
//!
//! let config = VerityConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base());
//! ```

mod api;
mod error;
mod history;
mod share;

pub use api::{ApiConfig, DEFAULT_API_BASE};
pub use error::ConfigError;
pub use history::{HistoryConfig, MAX_HISTORY_CAPACITY};
pub use share::ShareConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerityConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

impl VerityConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_project(Path::new("."))
    }

    /// Build the provider chain using `project_root/.verity/config.toml` as
    /// the project layer.
    #[must_use]
    pub fn figment_with_project(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(".verity").join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERITY_").split("__"))
    }

    /// Reject values that would only fail later, at request or write time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.api.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.api.base_url),
            });
        }
        if !is_http_url(&self.share.page_url) {
            return Err(ConfigError::InvalidValue {
                field: "share.page_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.share.page_url),
            });
        }
        if !(1..=MAX_HISTORY_CAPACITY).contains(&self.history.capacity) {
            return Err(ConfigError::InvalidValue {
                field: "history.capacity".into(),
                reason: format!(
                    "must be between 1 and {MAX_HISTORY_CAPACITY}, got {}",
                    self.history.capacity
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verity").join("config.toml"))
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}
