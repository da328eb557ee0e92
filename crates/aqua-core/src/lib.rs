#![deny(unsafe_code)]

//! Cleaning of mapped uploads: field cleaners, duplicate removal, row
//! survival and the per-kind pipeline tying them together.

pub mod cleaners;
pub mod config;
pub mod datetime;
pub mod dedupe;
pub mod error;
pub mod numeric;
pub mod pipeline;
pub mod report;
pub mod survival;

pub use cleaners::{CleanerRegistry, FieldCleaner};
pub use config::{CleaningConfig, EventIdPolicy, FishConfig, OceanConfig, STRICT_EVENT_ID_PATTERN};
pub use datetime::parse_timestamp;
pub use error::{CleanError, Result};
pub use numeric::coerce_number;
pub use pipeline::{CleaningOutcome, CleaningPipeline, build_records, clean};
pub use report::{CleanStats, CleaningReport};
pub use survival::SurvivalRule;
