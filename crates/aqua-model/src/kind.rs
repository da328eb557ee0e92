#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Selects the standard schema, cleaners and row-survival rule for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Oceanographic measurements (temperature, depth, position, ...).
    Ocean,
    /// Fish taxonomic observations.
    Fish,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Fish => "fish",
        }
    }
}

impl FromStr for DatasetKind {
    type Err = ModelError;

    /// Kind selectors are matched exactly; no case folding or guessing.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ocean" => Ok(Self::Ocean),
            "fish" => Ok(Self::Fish),
            other => Err(ModelError::UnknownDatasetKind(other.to_string())),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
