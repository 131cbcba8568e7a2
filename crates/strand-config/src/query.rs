//! Query text configuration
//!
//! Controls how bound parameters are named and how their placeholders are
//! written into Cypher and Gremlin text.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// How a parameter placeholder is written into query text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `{p0}`, the classic Cypher form
    #[default]
    Braced,
    /// `$p0`, the newer Cypher form
    Dollar,
    /// `p0`, used by Gremlin scripts where parameters are script variables
    Bare,
}

impl PlaceholderStyle {
    /// Render the placeholder for a parameter name
    pub fn render(self, name: &str) -> String {
        match self {
            Self::Braced => format!("{{{}}}", name),
            Self::Dollar => format!("${}", name),
            Self::Bare => name.to_string(),
        }
    }
}

/// Settings for the parameter binder and formatters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Prefix of generated parameter names (`p` gives `p0, p1, ...`)
    pub parameter_prefix: String,
    /// Placeholder syntax for Cypher text
    pub cypher_placeholder: PlaceholderStyle,
    /// Placeholder syntax for Gremlin text
    pub gremlin_placeholder: PlaceholderStyle,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            parameter_prefix: "p".to_string(),
            cypher_placeholder: PlaceholderStyle::Braced,
            gremlin_placeholder: PlaceholderStyle::Bare,
        }
    }
}

impl QueryConfig {
    /// Set the parameter prefix
    pub fn with_parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = prefix.into();
        self
    }

    /// Set the Cypher placeholder style
    pub fn with_cypher_placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.cypher_placeholder = style;
        self
    }

    /// Set the Gremlin placeholder style
    pub fn with_gremlin_placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.gremlin_placeholder = style;
        self
    }

    /// Check that every field holds a usable value.
    ///
    /// The prefix becomes part of an identifier in the target language, so it
    /// must start with a letter or underscore and contain only ASCII
    /// alphanumerics and underscores.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut chars = self.parameter_prefix.chars();
        match chars.next() {
            None => {
                return Err(ConfigError::invalid(
                    "parameter_prefix",
                    "must not be empty",
                ))
            }
            Some(first) if !(first.is_ascii_alphabetic() || first == '_') => {
                return Err(ConfigError::invalid(
                    "parameter_prefix",
                    format!("must start with a letter or underscore, got {:?}", first),
                ))
            }
            Some(_) => {}
        }
        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(ConfigError::invalid(
                "parameter_prefix",
                format!("contains invalid character {:?}", bad),
            ));
        }
        Ok(())
    }
}
