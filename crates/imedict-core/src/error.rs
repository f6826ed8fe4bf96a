//! Error type shared by the loader, the serializers and the batch driver.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("top-level value must be an object in {}", path.display())]
    NotAnObject { path: PathBuf },

    /// A required key is absent. Only this error lets a batch continue.
    #[error("No \"{key}\" key in {}", path.display())]
    MissingField { key: &'static str, path: PathBuf },

    #[error("The value of \"{key}\" must be {expected} in {}", path.display())]
    InvalidType {
        key: &'static str,
        expected: &'static str,
        path: PathBuf,
    },

    #[error("The value of \"{key}\" must not be empty in {}", path.display())]
    EmptyField { key: &'static str, path: PathBuf },

    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl DictError {
    /// Whether a batch may skip the offending source and go on with the rest.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DictError::MissingField { .. })
    }
}

pub type Result<T> = std::result::Result<T, DictError>;
