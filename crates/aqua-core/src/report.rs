//! Per-run counters reported alongside the cleaned records.

use std::collections::BTreeMap;

use aqua_map::ColumnMapping;
use aqua_model::DatasetKind;
use serde::Serialize;

/// What a cleaning run did to the upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleaningReport {
    pub kind: Option<DatasetKind>,
    pub input_rows: usize,
    pub skipped_lines: usize,
    pub duplicate_rows: usize,
    pub dropped_rows: usize,
    pub output_rows: usize,
    pub mapping: ColumnMapping,
    pub stats: CleanStats,
}

/// Cell-level changes made by field cleaners.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanStats {
    /// Cells blanked per field (unparseable, out of range, or rejected).
    pub blanked: BTreeMap<String, usize>,
    /// Event IDs synthesized for blank or placeholder values.
    pub regenerated_ids: usize,
    /// Locality values inferred from coordinates.
    pub inferred_localities: usize,
}

impl CleanStats {
    pub fn record_blanked(&mut self, field: &str, count: usize) {
        if count > 0 {
            *self.blanked.entry(field.to_string()).or_default() += count;
        }
    }

    pub fn total_blanked(&self) -> usize {
        self.blanked.values().sum()
    }
}
