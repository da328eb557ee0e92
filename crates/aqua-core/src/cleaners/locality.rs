use aqua_model::{CellValue, RecordSet};
use aqua_standards::{RegionTable, names};

use super::FieldCleaner;
use crate::numeric::cell_number;
use crate::report::CleanStats;

/// Fills blank localities from the record's coordinates.
///
/// Adds the `locality` column when the upload did not provide one. Records
/// without usable coordinates get `Unknown`.
#[derive(Debug, Clone)]
pub struct LocalityCleaner {
    regions: RegionTable,
}

impl LocalityCleaner {
    pub fn new(regions: RegionTable) -> Self {
        Self { regions }
    }

    fn needs_locality(cell: Option<&CellValue>) -> bool {
        match cell {
            None | Some(CellValue::Missing) => true,
            Some(CellValue::Text(text)) => {
                let trimmed = text.trim();
                trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
            }
            Some(_) => false,
        }
    }
}

impl FieldCleaner for LocalityCleaner {
    fn field(&self) -> &str {
        names::LOCALITY
    }

    fn description(&self) -> &'static str {
        "Locality inference from coordinates"
    }

    fn creates_column(&self) -> bool {
        true
    }

    fn clean(&self, records: &mut RecordSet, stats: &mut CleanStats) {
        records.ensure_column(names::LOCALITY);
        for record in &mut records.records {
            if !Self::needs_locality(record.get(names::LOCALITY)) {
                continue;
            }
            let lat = record.get(names::LATITUDE).and_then(cell_number);
            let lon = record.get(names::LONGITUDE).and_then(cell_number);
            let locality = self.regions.locate_optional(lat, lon);
            record.set(names::LOCALITY, CellValue::Text(locality));
            stats.inferred_localities += 1;
        }
    }
}
