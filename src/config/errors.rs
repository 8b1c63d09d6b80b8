//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

impl ConfigError {
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name,
            value: value.into(),
        }
    }
}
