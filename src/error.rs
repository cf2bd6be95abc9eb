//! Error types for identicon generation

use thiserror::Error;

/// Result type alias for identicon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or rendering an identicon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Compact config string is not exactly 24 characters long
    #[error("Invalid config length: expected 24 characters, got {0}")]
    InvalidConfigLength(usize),

    /// A field of the compact config string is not hexadecimal
    #[error("Invalid config field {field}: {value:?} is not hexadecimal")]
    InvalidConfigField {
        field: &'static str,
        value: String,
    },

    /// A color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Programmatic configuration that cannot be rendered
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to write the SVG markup
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
