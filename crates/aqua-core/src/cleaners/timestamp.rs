use aqua_model::{CellValue, RecordSet};

use super::FieldCleaner;
use crate::datetime::parse_timestamp;
use crate::report::CleanStats;

/// Parses a column into timestamps; unparseable cells become missing.
#[derive(Debug, Clone)]
pub struct TimestampCleaner {
    field: String,
}

impl TimestampCleaner {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldCleaner for TimestampCleaner {
    fn field(&self) -> &str {
        &self.field
    }

    fn description(&self) -> &'static str {
        "Permissive timestamp parsing"
    }

    fn clean(&self, records: &mut RecordSet, stats: &mut CleanStats) {
        let mut blanked = 0;
        for (_, cell) in records.column_mut(&self.field) {
            let parsed = match cell {
                CellValue::Text(text) => parse_timestamp(text),
                CellValue::Timestamp(value) => Some(*value),
                _ => None,
            };
            let was_present = !cell.is_missing();
            *cell = parsed.map_or(CellValue::Missing, CellValue::Timestamp);
            if was_present && cell.is_missing() {
                blanked += 1;
            }
        }
        stats.record_blanked(&self.field, blanked);
    }
}
