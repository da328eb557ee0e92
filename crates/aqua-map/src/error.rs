//! Error types for mapping operations.

use std::fmt;

/// Errors from explicit mapping overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Override text is not `SOURCE=FIELD`.
    InvalidOverride(String),
    /// Field not found in the standard schema.
    FieldNotFound(String),
    /// Column not found in the uploaded header.
    ColumnNotFound(String),
    /// Column already mapped to another field.
    ColumnAlreadyUsed { column: String, field: String },
    /// Field already claimed by another column.
    FieldAlreadyMapped { field: String, column: String },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOverride(raw) => {
                write!(f, "Invalid column override '{raw}' (expected SOURCE=FIELD)")
            }
            Self::FieldNotFound(v) => write!(f, "Field not found: {v}"),
            Self::ColumnNotFound(c) => write!(f, "Column not found: {c}"),
            Self::ColumnAlreadyUsed { column, field } => {
                write!(f, "Column '{column}' already mapped to '{field}'")
            }
            Self::FieldAlreadyMapped { field, column } => {
                write!(f, "Field '{field}' already mapped from '{column}'")
            }
        }
    }
}

impl std::error::Error for MappingError {}
