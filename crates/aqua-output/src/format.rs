use aqua_model::CellValue;
use chrono::NaiveDateTime;

/// ISO-8601 with millisecond precision, e.g. `2023-01-15T10:30:00.000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders a float the way the JSON output does: whole numbers keep `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Text form of a cell for CSV export; `None` for missing cells.
pub fn cell_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(text) => Some(text.clone()),
        CellValue::Number(value) if value.is_finite() => Some(format_number(*value)),
        CellValue::Timestamp(value) => Some(format_timestamp(value)),
        _ => None,
    }
}
