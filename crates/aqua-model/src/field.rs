//! Standard field descriptors.
//!
//! A [`StandardField`] is one named, typed slot of a dataset kind's canonical
//! schema. Numeric fields may carry an inclusive [`ValueRange`]; values outside
//! it are treated as missing by the cleaners.

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

/// Declared semantic type of a standard field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Record identifier, kept as text.
    Identifier,
    /// Free-text or category label, passed through.
    Category,
    /// Floating point measurement.
    Float,
    /// Point in time.
    Timestamp,
}

/// Inclusive numeric bounds. An open side is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns true when `value` lies within the bounds (both ends inclusive).
    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub fn validate(&self, field: &str) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(ModelError::InvalidRange {
                field: field.to_string(),
                min,
                max,
            });
        }
        Ok(())
    }
}

/// A named, typed slot in a dataset kind's canonical schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardField {
    /// Canonical output name (e.g. `temperature_C`).
    pub name: String,
    pub field_type: FieldType,
    /// Valid range for numeric fields.
    pub range: Option<ValueRange>,
    /// Extra labels the column mapper also accepts for this field.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl StandardField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidFieldName(name));
        }
        Ok(Self {
            name: trimmed.to_string(),
            field_type,
            range: None,
            aliases: Vec::new(),
        })
    }

    pub fn with_range(mut self, range: ValueRange) -> Result<Self> {
        range.validate(&self.name)?;
        self.range = Some(range);
        Ok(self)
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}
