//! Error types for config loading, merging and writing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BmfcError>;

#[derive(Debug, Error)]
pub enum BmfcError {
    /// A numeric or range token could not be coerced.
    #[error("Invalid value for '{key}': {value:?} ({reason})")]
    Format { key: String, value: String, reason: String },

    #[error("Cannot read or write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("In template {path:?}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: Box<BmfcError>,
    },

    #[error("In config[{index}]: {source}")]
    Entry {
        index: usize,
        #[source]
        source: Box<BmfcError>,
    },
}

impl BmfcError {
    pub(crate) fn format(key: &str, value: &str, reason: impl ToString) -> Self {
        Self::Format { key: key.to_string(), value: value.to_string(), reason: reason.to_string() }
    }

    pub(crate) fn in_template(path: impl Into<PathBuf>, source: BmfcError) -> Self {
        Self::Template { path: path.into(), source: Box::new(source) }
    }

    pub(crate) fn in_entry(index: usize, source: BmfcError) -> Self {
        Self::Entry { index, source: Box::new(source) }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
