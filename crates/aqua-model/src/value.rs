#![deny(unsafe_code)]

use chrono::NaiveDateTime;

/// A single cell of a cleaned record.
///
/// Cells start as [`CellValue::Text`] or [`CellValue::Missing`] after column
/// mapping; field cleaners coerce them to numbers or timestamps in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Timestamp(NaiveDateTime),
    #[default]
    Missing,
}

impl CellValue {
    /// Builds a text cell, mapping `None` to [`CellValue::Missing`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => Self::Text(value.to_string()),
            None => Self::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Number(value) => !value.is_finite(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}
