//! JSON array rendering of cleaned records.
//!
//! Keys follow the record set's column order. Numbers are written as floats,
//! timestamps as ISO-8601 strings, missing cells as `null`.

use std::io::Write;

use aqua_model::{CellValue, Record, RecordSet};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::format::format_timestamp;

struct CellJson<'a>(&'a CellValue);

impl Serialize for CellJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Number(value) if value.is_finite() => serializer.serialize_f64(*value),
            CellValue::Timestamp(value) => serializer.serialize_str(&format_timestamp(value)),
            _ => serializer.serialize_none(),
        }
    }
}

struct RecordJson<'a> {
    columns: &'a [String],
    record: &'a Record,
}

impl Serialize for RecordJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            let cell = self.record.get(column).unwrap_or(&CellValue::Missing);
            map.serialize_entry(column, &CellJson(cell))?;
        }
        map.end()
    }
}

/// Serializable view of a record set as an array of objects.
pub struct RecordsJson<'a>(pub &'a RecordSet);

impl Serialize for RecordsJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let records = self.0;
        let mut seq = serializer.serialize_seq(Some(records.len()))?;
        for record in &records.records {
            seq.serialize_element(&RecordJson {
                columns: &records.columns,
                record,
            })?;
        }
        seq.end()
    }
}

/// Renders the records as a single-line JSON array.
pub fn render_json(records: &RecordSet) -> Result<String> {
    Ok(serde_json::to_string(&RecordsJson(records))?)
}

/// Writes the records as a single-line JSON array followed by a newline.
pub fn write_json<W: Write>(records: &RecordSet, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, &RecordsJson(records))?;
    writer
        .write_all(b"\n")
        .map_err(serde_json::Error::io)?;
    Ok(())
}
