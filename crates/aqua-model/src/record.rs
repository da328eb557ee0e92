#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::{CellValue, DatasetKind};

/// One row of the cleaned table, keyed by standard field name.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 0-based position of the source row among the accepted input rows.
    pub position: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            cells: BTreeMap::new(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.cells.get(field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut CellValue> {
        self.cells.get_mut(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: CellValue) {
        self.cells.insert(field.into(), value);
    }

    /// True when the field is absent or holds a missing value.
    pub fn is_missing(&self, field: &str) -> bool {
        self.cells.get(field).is_none_or(CellValue::is_missing)
    }
}

/// The in-progress (and finally emitted) cleaned table for one run.
///
/// `columns` fixes the output order; every record holds a cell for each
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    pub kind: DatasetKind,
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(kind: DatasetKind, columns: Vec<String>) -> Self {
        Self {
            kind,
            columns,
            records: Vec::new(),
        }
    }

    /// A record set with no columns and no rows.
    pub fn empty(kind: DatasetKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Appends `name` as a column filled with missing cells.
    ///
    /// Returns false if the column already existed.
    pub fn ensure_column(&mut self, name: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.columns.push(name.to_string());
        for record in &mut self.records {
            record
                .cells
                .entry(name.to_string())
                .or_insert(CellValue::Missing);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keeps only the records matching `keep`; returns how many were removed.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&Record) -> bool,
    {
        let before = self.records.len();
        self.records.retain(keep);
        before - self.records.len()
    }

    /// Mutable access to one column's cells, in record order.
    pub fn column_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = (usize, &'a mut CellValue)> + 'a {
        self.records.iter_mut().filter_map(move |record| {
            let position = record.position;
            record.cells.get_mut(name).map(|cell| (position, cell))
        })
    }
}
