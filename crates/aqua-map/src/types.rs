//! Column mapping types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// How a column came to be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrigin {
    /// Requested explicitly.
    Override,
    /// Matched the field's own name.
    Name,
    /// Matched one of the field's aliases.
    Alias,
}

/// One uploaded column assigned to one standard field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedColumn {
    /// Uploaded header label.
    pub source_column: String,
    /// Index of the label in the uploaded header.
    pub source_index: usize,
    /// Standard field name.
    pub target_field: String,
    /// Similarity of the normalized keys (0.0 to 1.0); informational only.
    pub confidence: f32,
    pub origin: MatchOrigin,
}

/// Injective partial mapping from uploaded labels to standard fields.
///
/// `mappings` is ordered by the standard field order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub mappings: Vec<MappedColumn>,
    /// Uploaded labels left out of the cleaned output.
    pub unmapped_columns: Vec<String>,
}

impl ColumnMapping {
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn target_for(&self, source_column: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.source_column == source_column)
            .map(|m| m.target_field.as_str())
    }

    pub fn source_for(&self, target_field: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.target_field == target_field)
            .map(|m| m.source_column.as_str())
    }

    pub fn target_fields(&self) -> Vec<&str> {
        self.mappings
            .iter()
            .map(|m| m.target_field.as_str())
            .collect()
    }
}

/// An explicit `SOURCE=FIELD` assignment claimed before fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOverride {
    pub source_column: String,
    pub target_field: String,
}

impl FromStr for ColumnOverride {
    type Err = MappingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some((source, target)) = raw.rsplit_once('=') else {
            return Err(MappingError::InvalidOverride(raw.to_string()));
        };
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            return Err(MappingError::InvalidOverride(raw.to_string()));
        }
        Ok(Self {
            source_column: source.to_string(),
            target_field: target.to_string(),
        })
    }
}
