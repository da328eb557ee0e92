#![deny(unsafe_code)]

//! Column reconciliation: label normalization and injective mapping of
//! uploaded columns onto a dataset kind's standard fields.

pub mod error;
pub mod mapper;
pub mod normalize;
pub mod types;

pub use error::MappingError;
pub use mapper::{ColumnMapper, map_columns};
pub use normalize::{keys_match, normalize_label};
pub use types::{ColumnMapping, ColumnOverride, MappedColumn, MatchOrigin};
