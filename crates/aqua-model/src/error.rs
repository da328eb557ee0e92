use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("unknown dataset kind '{0}' (expected one of: ocean, fish)")]
    UnknownDatasetKind(String),
    #[error("invalid field name '{0}'")]
    InvalidFieldName(String),
    #[error("invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange { field: String, min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
