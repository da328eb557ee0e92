//! Dataset cleaning pipeline.
//!
//! A run executes these stages in order, each inside its own span:
//!
//! 1. **map** - reconcile uploaded headers with the kind's schema
//! 2. **build** - rename mapped columns into cleaned records
//! 3. **dedupe** - drop exact duplicate rows
//! 4. **clean** - apply the kind's field cleaners
//! 5. **survive** - drop rows failing the kind's survival rule
//!
//! An upload where no column maps yields an empty record set.

use aqua_ingest::CsvTable;
use aqua_map::{ColumnMapper, ColumnMapping, ColumnOverride};
use aqua_model::{CellValue, DatasetKind, Record, RecordSet};
use tracing::{debug, info, info_span, warn};

use crate::config::CleaningConfig;
use crate::dedupe::drop_duplicate_rows;
use crate::error::Result;
use crate::report::CleaningReport;

/// Cleaned records plus what happened on the way.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub records: RecordSet,
    pub report: CleaningReport,
}

/// Cleans uploads of one dataset kind.
#[derive(Debug, Clone)]
pub struct CleaningPipeline {
    config: CleaningConfig,
    overrides: Vec<ColumnOverride>,
}

impl CleaningPipeline {
    pub fn new(config: CleaningConfig) -> Self {
        Self {
            config,
            overrides: Vec::new(),
        }
    }

    /// Explicit column assignments applied before automatic matching.
    pub fn with_overrides(mut self, overrides: Vec<ColumnOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn kind(&self) -> DatasetKind {
        self.config.kind()
    }

    pub fn run(&self, table: &CsvTable) -> Result<CleaningOutcome> {
        let kind = self.config.kind();
        let span = info_span!("clean", kind = %kind, rows = table.len());
        let _guard = span.enter();

        let mut report = CleaningReport {
            kind: Some(kind),
            input_rows: table.len(),
            skipped_lines: table.skipped_lines,
            ..CleaningReport::default()
        };

        let mapping = {
            let _stage = info_span!("map").entered();
            let mapping = ColumnMapper::new(&self.config.schema().fields)
                .with_overrides(self.overrides.clone())
                .map(&table.headers)?;
            info!(
                mapped = mapping.len(),
                unmapped = mapping.unmapped_columns.len(),
                "mapped columns"
            );
            for column in &mapping.mappings {
                debug!(
                    source = %column.source_column,
                    target = %column.target_field,
                    confidence = column.confidence,
                    "column match"
                );
            }
            mapping
        };

        if mapping.is_empty() {
            warn!("no uploaded column matches a standard field");
            report.mapping = mapping;
            return Ok(CleaningOutcome {
                records: RecordSet::empty(kind),
                report,
            });
        }

        let mut records = build_records(kind, table, &mapping);
        let uploaded = records.columns.clone();

        {
            let _stage = info_span!("dedupe").entered();
            report.duplicate_rows = drop_duplicate_rows(&mut records);
            info!(removed = report.duplicate_rows, "removed duplicate rows");
        }

        {
            let _stage = info_span!("clean_fields").entered();
            self.config.registry().apply(&mut records, &mut report.stats);
            info!(
                blanked = report.stats.total_blanked(),
                regenerated_ids = report.stats.regenerated_ids,
                inferred_localities = report.stats.inferred_localities,
                "cleaned fields"
            );
        }

        {
            let _stage = info_span!("survive").entered();
            report.dropped_rows = self.config.survival().apply(&mut records, &uploaded);
            info!(dropped = report.dropped_rows, "applied row survival");
        }

        report.output_rows = records.len();
        report.mapping = mapping;
        info!(records = report.output_rows, "cleaning complete");
        Ok(CleaningOutcome { records, report })
    }
}

/// Renames mapped columns into records keyed by standard field name.
///
/// Columns follow the mapping order; unmapped uploaded columns are dropped.
pub fn build_records(kind: DatasetKind, table: &CsvTable, mapping: &ColumnMapping) -> RecordSet {
    let columns = mapping
        .target_fields()
        .into_iter()
        .map(str::to_string)
        .collect();
    let mut records = RecordSet::new(kind, columns);
    for row in &table.rows {
        let mut record = Record::new(row.position);
        for column in &mapping.mappings {
            record.set(
                column.target_field.clone(),
                CellValue::from_raw(row.cell(column.source_index)),
            );
        }
        records.push_record(record);
    }
    records
}

/// Cleans `table` as the named dataset kind with default configuration.
///
/// Unknown kinds are rejected before any work is done.
pub fn clean(kind: &str, table: &CsvTable) -> Result<RecordSet> {
    let kind: DatasetKind = kind.parse()?;
    let pipeline = CleaningPipeline::new(CleaningConfig::for_kind(kind)?);
    Ok(pipeline.run(table)?.records)
}
