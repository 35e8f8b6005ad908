//! Error types for lexicon and configuration loading.
//!
//! Classification itself has no error path; every variant here is raised at
//! startup, before a [`Classifier`](crate::Classifier) exists.

use crate::lexicon::Category;
use thiserror::Error;

/// Errors that prevent the engine from starting.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A required category has no usable phrases in any language.
    #[error("lexicon category `{category}` is empty")]
    EmptyCategory { category: Category },

    /// A phrase could not be compiled into a matcher.
    #[error("invalid phrase {phrase:?} in category `{category}`: {reason}")]
    InvalidPhrase {
        category: Category,
        phrase: String,
        reason: String,
    },

    /// A lexicon or config file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A lexicon or config file is not valid TOML for its schema.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {message}")]
    InvalidValue { message: String },
}

/// Result type for startup operations.
pub type ConfigResult<T> = Result<T, ConfigurationError>;
