use aqua_model::CellValue;

/// Parses a numeric cell. Blank, non-numeric and non-finite text is `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Numeric view of a cell, whether or not it has been coerced yet.
pub fn cell_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Text(text) => coerce_number(text),
        CellValue::Number(value) if value.is_finite() => Some(*value),
        _ => None,
    }
}
