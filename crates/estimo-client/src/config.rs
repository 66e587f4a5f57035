//! Service configuration
//!
//! Settings resolve in this order, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. User file `~/.estimo/config.toml`
//! 3. Project file `.estimo/config.toml`
//! 4. An explicit file (`--config <path>`)
//! 5. The `ESTIMO_BASE_URL` environment variable
//!
//! ```toml
//! [service]
//! base_url = "http://localhost:8000"
//! price_per_square_meter_path = "/get-price-per-square-meters/"
//! valuation_path = "/property-price-valuation/"
//! user_agent = "estimo/0.1.0"
//! ```
//!
//! There is no timeout setting: requests use the HTTP client's default,
//! which never gives up on a slow service.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the service base URL
pub const BASE_URL_ENV: &str = "ESTIMO_BASE_URL";

/// Directory holding user and project configuration
pub const CONFIG_DIR: &str = ".estimo";

/// Configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "http://51.20.64.222:8000";
pub const DEFAULT_PRICE_PER_SQUARE_METER_PATH: &str = "/get-price-per-square-meters/";
pub const DEFAULT_VALUATION_PATH: &str = "/property-price-valuation/";

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("TOML parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimoConfig {
    pub service: ServiceConfig,
}

/// Estimation service location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub price_per_square_meter_path: String,
    pub valuation_path: String,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            price_per_square_meter_path: DEFAULT_PRICE_PER_SQUARE_METER_PATH.to_string(),
            valuation_path: DEFAULT_VALUATION_PATH.to_string(),
            user_agent: format!("estimo/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceConfig {
    /// Config pointing at a different host, keeping default paths
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// One configuration file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    service: ServiceOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceOverrides {
    base_url: Option<String>,
    price_per_square_meter_path: Option<String>,
    valuation_path: Option<String>,
    user_agent: Option<String>,
}

impl EstimoConfig {
    /// Load configuration from the standard locations
    ///
    /// `explicit` must exist when given; the user and project files are
    /// skipped when missing.
    pub fn load_standard(
        project_root: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(home) = dirs::home_dir() {
            config.merge_optional_file(&home.join(CONFIG_DIR).join(CONFIG_FILE))?;
        }

        if let Some(root) = project_root {
            config.merge_optional_file(&root.join(CONFIG_DIR).join(CONFIG_FILE))?;
        }

        if let Some(path) = explicit {
            config.merge_file(path)?;
        }

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a complete configuration from TOML text over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge_str(content, Path::new("<inline>"))?;
        Ok(config)
    }

    /// Merge a file that must exist
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("Loading configuration from {}", path.display());
        self.merge_str(&content, path)
    }

    /// Merge a file if it exists; an unreadable file is logged and skipped
    fn merge_optional_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Ok(());
        }
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::info!("Loading configuration from {}", path.display());
                self.merge_str(&content, path)
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable config {}: {}", path.display(), e);
                Ok(())
            }
        }
    }

    fn merge_str(&mut self, content: &str, path: &Path) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let service = file.service;
        if let Some(base_url) = service.base_url {
            self.service.base_url = base_url;
        }
        if let Some(path) = service.price_per_square_meter_path {
            self.service.price_per_square_meter_path = path;
        }
        if let Some(path) = service.valuation_path {
            self.service.valuation_path = path;
        }
        if let Some(user_agent) = service.user_agent {
            self.service.user_agent = user_agent;
        }
        Ok(())
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Base URL overridden by {}", BASE_URL_ENV);
            self.service.base_url = base_url.trim().to_string();
        }
    }
}
