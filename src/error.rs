//! Error types for Gati

use thiserror::Error;

/// Gati error type
#[derive(Error, Debug)]
pub enum Error {
    /// A transform component was NaN or infinite
    #[error("Non-finite {component} component: {value}")]
    NonFinite {
        /// Component name (`x`, `y` or `th`)
        component: &'static str,
        /// Offending value
        value: f64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unparsable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
