//! Configuration error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// TOML text could not be parsed
    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON text could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension does not name a supported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A field holds a value that parses but is not usable
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Specialized Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a validation error for `field`
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// Check if the error came from the content rather than the filesystem
    pub fn is_content_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_names_field() {
        let err = ConfigError::invalid("parameter_prefix", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid value for `parameter_prefix`: must not be empty"
        );
        assert!(err.is_content_error());
    }

    #[test]
    fn test_io_error_is_not_content_error() {
        let err = ConfigError::Io {
            path: PathBuf::from("missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_content_error());
        assert!(err.to_string().contains("missing.toml"));
    }
}
