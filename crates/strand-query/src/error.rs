//! Formatting error types

use strand_config::ConfigError;
use thiserror::Error;

/// Errors raised while turning bindings into query text.
///
/// Every variant describes a caller mistake; they are returned unchanged and
/// never retried.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A structural record with no fields was supplied where bindings were expected
    #[error("Invalid argument `{param}`: at least one binding is required")]
    InvalidArgument {
        /// Name of the offending argument
        param: &'static str,
    },

    /// A binding holds a value of a type the formatter cannot render
    #[error("Binding `{name}` has unsupported type `{type_name}`")]
    UnsupportedType {
        /// Binding name the value was supplied under
        name: String,
        /// Full type path of the value
        type_name: &'static str,
    },

    /// A structural record declares the same binding name twice
    #[error("Binding `{name}` is declared more than once")]
    DuplicateBinding {
        /// The repeated name
        name: String,
    },

    /// The configuration passed to a builder failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Specialized Result type for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    /// Create an unsupported type error
    pub fn unsupported(name: impl Into<String>, type_name: &'static str) -> Self {
        Self::UnsupportedType {
            name: name.into(),
            type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_contains_name_and_type() {
        let err = FormatError::unsupported("n1", "my_app::Widget");
        let msg = err.to_string();
        assert!(msg.contains("n1"));
        assert!(msg.contains("my_app::Widget"));
    }

    #[test]
    fn test_invalid_argument_names_param() {
        let err = FormatError::InvalidArgument {
            param: "start_bits",
        };
        assert!(err.to_string().contains("start_bits"));
    }

    #[test]
    fn test_config_error_keeps_its_message() {
        let err: FormatError = ConfigError::invalid("parameter_prefix", "must not be empty").into();
        assert_eq!(
            err.to_string(),
            "Invalid value for `parameter_prefix`: must not be empty"
        );
    }
}
