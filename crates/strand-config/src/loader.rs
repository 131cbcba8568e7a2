//! Configuration loading from text and files

use crate::error::{ConfigError, ConfigResult};
use crate::query::QueryConfig;
use std::path::Path;
use tracing::debug;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document
    #[cfg(feature = "toml")]
    Toml,
    /// JSON document
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            #[cfg(feature = "toml")]
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl QueryConfig {
    /// Parse and validate a TOML document
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Self::parse(text, ConfigFormat::Toml)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        Self::parse(text, ConfigFormat::Json)
    }

    /// Parse and validate text in the given format
    pub fn parse(text: &str, format: ConfigFormat) -> ConfigResult<Self> {
        let config: Self = match format {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(text)?,
            ConfigFormat::Json => serde_json::from_str(text)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, choosing the format from its extension
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, format)?;
        debug!(
            path = %path.display(),
            prefix = %config.parameter_prefix,
            "Loaded query config"
        );
        Ok(config)
    }
}
