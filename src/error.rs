//! Error types for pattern configuration

use crate::patterns::PatternKind;
use thiserror::Error;

/// Errors that can occur while building a custom pattern set
///
/// Parsing a body never fails; only configuration does.
#[derive(Error, Debug)]
pub enum Error {
    /// A configured regular expression failed to compile
    #[error("Invalid {kind} pattern {name:?}: {source}")]
    InvalidPattern {
        kind: PatternKind,
        name: String,
        #[source]
        source: regex::Error,
    },

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to deserialize a configuration document
    #[error("Failed to read configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;
