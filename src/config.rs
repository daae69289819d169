//! Configuration file handling.
//!
//! The configuration lives in `<config dir>/chatmd/config.toml`. Missing
//! files and missing fields fall back to defaults, so an empty file is a
//! valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::title::DEFAULT_PRODUCT;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
}

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Hosting product stripped from titles and used in the placeholder title.
    pub product_name: String,
    /// Directory for exports when no output path is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Treat messages whose text starts with "You" as user messages when no
    /// marker or class identifies the speaker.
    pub text_prefix_heuristic: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT.to_string(),
            output_dir: None,
            text_prefix_heuristic: true,
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("chatmd").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads from the default location, or defaults when there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads from `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pretty TOML rendering.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let to_write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }
        fs::write(path, self.to_toml()?).map_err(to_write_error)
    }
}
