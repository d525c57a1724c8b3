//! Provider errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating a value.
#[derive(Debug, Error)]
pub enum FakeError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("{name} is not callable")]
    NotCallable { name: String },

    #[error("invalid argument '{param}': expected {expected}, got {got}")]
    InvalidArgument {
        param: String,
        expected: &'static str,
        got: String,
    },

    #[error("empty range for {what}: {low} > {high}")]
    Range {
        what: &'static str,
        low: String,
        high: String,
    },

    #[error("failed to encode {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FakeError {
    pub(crate) fn encode(format: &'static str, err: impl std::fmt::Display) -> Self {
        FakeError::Encode {
            format,
            message: err.to_string(),
        }
    }
}
