use aqua_map::MappingError;
use aqua_model::{DatasetKind, ModelError};
use aqua_standards::StandardsError;
use thiserror::Error;

/// Structural failures of a cleaning run.
///
/// Per-cell problems (bad numbers, out-of-range values, unparseable dates)
/// never surface here; cleaners turn them into missing values.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("column mapping failed: {0}")]
    Mapping(#[from] MappingError),

    #[error("failed to load reference data: {0}")]
    Standards(#[from] StandardsError),

    #[error("invalid event ID pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("{option} is not supported for {kind} datasets")]
    UnsupportedOption { option: String, kind: DatasetKind },
}

pub type Result<T> = std::result::Result<T, CleanError>;
