//! Data model for the aquatic upload cleaner.
//!
//! Dataset kinds, standard field descriptors and the cleaned record table
//! shared by the mapping, cleaning and output crates.

pub mod error;
pub mod field;
pub mod kind;
pub mod record;
pub mod value;

pub use error::{ModelError, Result};
pub use field::{FieldType, StandardField, ValueRange};
pub use kind::DatasetKind;
pub use record::{Record, RecordSet};
pub use value::CellValue;
