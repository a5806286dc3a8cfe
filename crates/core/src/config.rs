//! Application configuration.
//!
//! Values are layered: builtin defaults, then an optional TOML file, then
//! `GROCERY_HELPER__*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Directory name used under the platform config and cache roots.
pub const APP_DIR: &str = "grocery-helper";

const ENV_PREFIX: &str = "GROCERY_HELPER";

/// Runtime settings for the helper.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Default tracing filter, used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Directory receiving the log file.
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: default_log_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from [`default_config_path`] when `None`.
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_dir", defaults.log_dir.to_string_lossy().into_owned())?
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse configuration {}", path.display()))
    }
}

/// `<config dir>/grocery-helper/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// `<cache dir>/grocery-helper/logs`, or `./logs` when no cache dir is known.
pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
