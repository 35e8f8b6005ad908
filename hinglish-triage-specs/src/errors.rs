//! Error types for the fixture harness.

use thiserror::Error;

/// Errors raised while loading fixtures or the expected-failures ledger.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture file is not valid TOML for the fixture schema.
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A fixture file or directory could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture parsed but describes an impossible case.
    #[error("invalid case `{case}` in {path}: {message}")]
    Invalid {
        path: String,
        case: String,
        message: String,
    },
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
