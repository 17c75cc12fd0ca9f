//! # typeval-config
//!
//! Layered configuration loading for typeval using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TYPEVAL_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.typeval/config.toml`
//! 4. User-level `~/.config/typeval/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TYPEVAL_EVALUATION__MAX_CANDIDATES` -> `evaluation.max_candidates`,
//! `TYPEVAL_REPORT__DETAILS` -> `report.details`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use typeval_config::TypevalConfig;
//!
//! let config = TypevalConfig::load_with_dotenv(None).expect("config");
//! if let Some(k) = config.evaluation.candidate_limit() {
//!     println!("scoring top-{k} candidates");
//! }
//! ```

mod error;
mod evaluation;
mod report;

pub use error::ConfigError;
pub use evaluation::EvaluationConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TypevalConfig {
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl TypevalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `extra` does not exist, and
    /// `ConfigError::Figment` if any source fails to parse or extract.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(extra)?.extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `extra` does not exist.
    pub fn figment(extra: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".typeval/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = extra {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.display().to_string(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("TYPEVAL_").split("__"));

        Ok(figment)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("typeval").join("config.toml"))
    }
}
