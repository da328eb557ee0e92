//! Field cleaners and the per-kind dispatch table.
//!
//! Each [`FieldCleaner`] owns one standard field and rewrites that column of
//! a [`RecordSet`] in place. A [`CleanerRegistry`] holds the cleaners of one
//! dataset kind and applies them in registration order, skipping cleaners
//! whose column was not mapped unless they create it.

mod event_id;
mod locality;
mod numeric;
mod timestamp;

pub use event_id::{RegenerateEventIds, RequireEventIds};
pub use locality::LocalityCleaner;
pub use numeric::NumericCleaner;
pub use timestamp::TimestampCleaner;

use aqua_model::RecordSet;
use tracing::debug;

use crate::report::CleanStats;

/// Cleaning logic for one standard field.
pub trait FieldCleaner: Send + Sync {
    /// Standard field this cleaner rewrites.
    fn field(&self) -> &str;

    fn description(&self) -> &'static str {
        "Field cleaner"
    }

    /// Whether the cleaner runs (and adds its column) when the field was not
    /// mapped from the upload.
    fn creates_column(&self) -> bool {
        false
    }

    fn clean(&self, records: &mut RecordSet, stats: &mut CleanStats);
}

/// Ordered set of field cleaners for one dataset kind.
#[derive(Default)]
pub struct CleanerRegistry {
    cleaners: Vec<Box<dyn FieldCleaner>>,
}

impl CleanerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a cleaner, replacing any earlier cleaner for the same field.
    pub fn register(&mut self, cleaner: Box<dyn FieldCleaner>) {
        if let Some(slot) = self
            .cleaners
            .iter_mut()
            .find(|existing| existing.field() == cleaner.field())
        {
            *slot = cleaner;
        } else {
            self.cleaners.push(cleaner);
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.cleaners.iter().map(|cleaner| cleaner.field())
    }

    pub fn len(&self) -> usize {
        self.cleaners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaners.is_empty()
    }

    /// Runs every applicable cleaner over `records`.
    pub fn apply(&self, records: &mut RecordSet, stats: &mut CleanStats) {
        for cleaner in &self.cleaners {
            if !cleaner.creates_column() && !records.has_column(cleaner.field()) {
                continue;
            }
            debug!(
                field = cleaner.field(),
                cleaner = cleaner.description(),
                "cleaning field"
            );
            cleaner.clean(records, stats);
        }
    }
}
