use aqua_model::{CellValue, RecordSet, ValueRange};

use super::FieldCleaner;
use crate::numeric::cell_number;
use crate::report::CleanStats;

/// Coerces a column to numbers, blanking non-numeric and out-of-range cells.
#[derive(Debug, Clone)]
pub struct NumericCleaner {
    field: String,
    range: Option<ValueRange>,
}

impl NumericCleaner {
    pub fn new(field: impl Into<String>, range: Option<ValueRange>) -> Self {
        Self {
            field: field.into(),
            range,
        }
    }
}

impl FieldCleaner for NumericCleaner {
    fn field(&self) -> &str {
        &self.field
    }

    fn description(&self) -> &'static str {
        "Numeric coercion with optional inclusive range"
    }

    fn clean(&self, records: &mut RecordSet, stats: &mut CleanStats) {
        let mut blanked = 0;
        for (_, cell) in records.column_mut(&self.field) {
            let was_present = !cell.is_missing();
            let value = cell_number(cell)
                .filter(|value| self.range.is_none_or(|range| range.contains(*value)));
            *cell = value.map_or(CellValue::Missing, CellValue::Number);
            if was_present && cell.is_missing() {
                blanked += 1;
            }
        }
        stats.record_blanked(&self.field, blanked);
    }
}
