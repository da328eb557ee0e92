#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locality table {source_name}: {message}")]
    Csv {
        source_name: String,
        message: String,
    },

    #[error("invalid region '{name}' in {source_name}: {reason}")]
    InvalidRegion {
        source_name: String,
        name: String,
        reason: String,
    },

    #[error("locality table {source_name} has no regions")]
    EmptyRegionTable { source_name: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
