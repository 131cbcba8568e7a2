//! # Strand Configuration
//!
//! Settings that shape the text produced by `strand-query`: the parameter
//! name prefix and the placeholder syntax used for each query language.
//!
//! The defaults reproduce the classic Cypher `{p0}` and Gremlin `p0`
//! placeholder forms, so an empty configuration file changes nothing.
//!
//! ```rust
//! use strand_config::{PlaceholderStyle, QueryConfig};
//!
//! let config = QueryConfig::from_json_str(r#"{ "cypher_placeholder": "dollar" }"#).unwrap();
//! assert_eq!(config.cypher_placeholder, PlaceholderStyle::Dollar);
//! assert_eq!(config.parameter_prefix, "p");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod loader;
mod query;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigFormat;
pub use query::{PlaceholderStyle, QueryConfig};
