//! Canonical per-kind schemas.
//!
//! Field order matters: the column mapper lets earlier fields claim uploaded
//! columns first.

use aqua_model::{DatasetKind, FieldType, StandardField, ValueRange};

/// Standard field names used by the cleaners.
pub mod names {
    pub const EVENT_ID: &str = "eventID";
    pub const LOCALITY: &str = "locality";
    pub const TEMPERATURE: &str = "temperature_C";
    pub const DEPTH: &str = "DepthInMeters";
    pub const LATITUDE: &str = "decimalLatitude";
    pub const LONGITUDE: &str = "decimalLongitude";
    pub const SALINITY: &str = "sea_water_salinity";
    pub const OXYGEN: &str = "oxygen_concentration_mgL";
    pub const VELOCITY: &str = "sea_water_velocity";
    pub const EVENT_DATE: &str = "eventDate";

    pub const TAXON_ID: &str = "taxonID";
    pub const SCIENTIFIC_NAME: &str = "scientificName";
    pub const VERNACULAR_NAME: &str = "vernacularName";
    pub const PHYLUM: &str = "Phylum";
    pub const CLASS: &str = "Class";
    pub const ORDER: &str = "Order";
    pub const FAMILY: &str = "Family";
    pub const GENUS: &str = "Genus";
    pub const SPECIES: &str = "Species";
    pub const ORGANISM_QUANTITY: &str = "organismQuantity";
}

/// Valid water temperature in degrees Celsius.
pub const TEMPERATURE_RANGE: ValueRange = ValueRange {
    min: Some(-5.0),
    max: Some(50.0),
};

/// Valid depth in metres, from just above the surface to the deepest trenches.
pub const DEPTH_RANGE: ValueRange = ValueRange {
    min: Some(-5.0),
    max: Some(15000.0),
};

/// Organism counts may be zero but never negative.
pub const QUANTITY_RANGE: ValueRange = ValueRange {
    min: Some(0.0),
    max: None,
};

/// The ordered standard field list of one dataset kind.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    pub kind: DatasetKind,
    pub fields: Vec<StandardField>,
}

impl DatasetSchema {
    pub fn for_kind(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Ocean => ocean_schema(),
            DatasetKind::Fish => fish_schema(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&StandardField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn field(name: &str, field_type: FieldType) -> StandardField {
    StandardField {
        name: name.to_string(),
        field_type,
        range: None,
        aliases: Vec::new(),
    }
}

fn ranged(name: &str, range: ValueRange) -> StandardField {
    StandardField {
        range: Some(range),
        ..field(name, FieldType::Float)
    }
}

pub fn ocean_schema() -> DatasetSchema {
    DatasetSchema {
        kind: DatasetKind::Ocean,
        fields: vec![
            field(names::EVENT_ID, FieldType::Identifier),
            field(names::LOCALITY, FieldType::Category),
            ranged(names::TEMPERATURE, TEMPERATURE_RANGE),
            ranged(names::DEPTH, DEPTH_RANGE).with_aliases(["depth"]),
            field(names::LATITUDE, FieldType::Float),
            field(names::LONGITUDE, FieldType::Float),
            field(names::SALINITY, FieldType::Float),
            field(names::OXYGEN, FieldType::Float),
            field(names::VELOCITY, FieldType::Float),
            field(names::EVENT_DATE, FieldType::Timestamp),
        ],
    }
}

pub fn fish_schema() -> DatasetSchema {
    DatasetSchema {
        kind: DatasetKind::Fish,
        fields: vec![
            field(names::EVENT_ID, FieldType::Identifier),
            field(names::TAXON_ID, FieldType::Identifier),
            field(names::SCIENTIFIC_NAME, FieldType::Category),
            field(names::VERNACULAR_NAME, FieldType::Category),
            field(names::PHYLUM, FieldType::Category),
            field(names::CLASS, FieldType::Category),
            field(names::ORDER, FieldType::Category),
            field(names::FAMILY, FieldType::Category),
            field(names::GENUS, FieldType::Category),
            field(names::SPECIES, FieldType::Category),
            ranged(names::ORGANISM_QUANTITY, QUANTITY_RANGE),
        ],
    }
}
