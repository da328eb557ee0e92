use aqua_model::{CellValue, RecordSet};
use aqua_standards::names;
use regex::Regex;

use super::FieldCleaner;
use crate::report::CleanStats;

/// Replaces blank or placeholder event IDs with `{prefix}_{n}`.
///
/// `n` is the record's source position plus `offset`, so regenerated IDs are
/// stable across deduplication.
#[derive(Debug, Clone)]
pub struct RegenerateEventIds {
    prefix: String,
    offset: usize,
    placeholders: Vec<String>,
}

impl RegenerateEventIds {
    pub fn new(prefix: impl Into<String>, offset: usize) -> Self {
        Self {
            prefix: prefix.into(),
            offset,
            placeholders: Vec::new(),
        }
    }

    /// Additional literal values treated like a blank ID.
    pub fn with_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    fn needs_new_id(&self, cell: &CellValue) -> bool {
        match cell {
            CellValue::Text(text) => {
                let trimmed = text.trim();
                trimmed.is_empty() || self.placeholders.iter().any(|p| p == trimmed)
            }
            CellValue::Missing => true,
            CellValue::Number(value) => !value.is_finite(),
            CellValue::Timestamp(_) => false,
        }
    }
}

impl FieldCleaner for RegenerateEventIds {
    fn field(&self) -> &str {
        names::EVENT_ID
    }

    fn description(&self) -> &'static str {
        "Event ID regeneration"
    }

    fn clean(&self, records: &mut RecordSet, stats: &mut CleanStats) {
        for (position, cell) in records.column_mut(names::EVENT_ID) {
            if self.needs_new_id(cell) {
                *cell = CellValue::Text(format!("{}_{}", self.prefix, position + self.offset));
                stats.regenerated_ids += 1;
            }
        }
    }
}

/// Blanks event IDs that do not match a required pattern.
#[derive(Debug, Clone)]
pub struct RequireEventIds {
    pattern: Regex,
}

impl RequireEventIds {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl FieldCleaner for RequireEventIds {
    fn field(&self) -> &str {
        names::EVENT_ID
    }

    fn description(&self) -> &'static str {
        "Event ID pattern validation"
    }

    fn clean(&self, records: &mut RecordSet, stats: &mut CleanStats) {
        let mut blanked = 0;
        for (_, cell) in records.column_mut(names::EVENT_ID) {
            let valid = cell
                .as_text()
                .is_some_and(|text| self.pattern.is_match(text.trim()));
            if !valid {
                if !cell.is_missing() {
                    blanked += 1;
                }
                *cell = CellValue::Missing;
            } else if let CellValue::Text(text) = cell {
                *text = text.trim().to_string();
            }
        }
        stats.record_blanked(names::EVENT_ID, blanked);
    }
}
