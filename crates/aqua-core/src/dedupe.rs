use std::collections::BTreeSet;

use aqua_model::{CellValue, Record, RecordSet};

fn row_key(record: &Record, columns: &[String]) -> Vec<Option<String>> {
    columns
        .iter()
        .map(|column| match record.get(column) {
            Some(CellValue::Text(text)) => Some(text.clone()),
            Some(CellValue::Number(value)) if value.is_finite() => Some(value.to_string()),
            Some(CellValue::Timestamp(value)) => Some(value.to_string()),
            _ => None,
        })
        .collect()
}

/// Removes rows equal to an earlier row across every column.
///
/// The first occurrence is kept with its original position. Returns the
/// number of rows removed.
pub fn drop_duplicate_rows(records: &mut RecordSet) -> usize {
    let columns = records.columns.clone();
    let mut seen = BTreeSet::new();
    records.retain(|record| seen.insert(row_key(record, &columns)))
}
