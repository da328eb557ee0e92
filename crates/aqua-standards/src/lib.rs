#![deny(unsafe_code)]

pub mod embedded;
pub mod error;
pub mod regions;
pub mod schema;

pub use crate::error::StandardsError;
pub use crate::regions::{Region, RegionTable, UNKNOWN_LOCALITY};
pub use crate::schema::{DatasetSchema, fish_schema, names, ocean_schema};
