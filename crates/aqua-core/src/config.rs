//! Per-kind cleaning configuration.
//!
//! Each dataset kind gets an explicit config struct carrying its schema,
//! identifier rules, locality table and survival fields. The pipeline reads
//! everything it needs from here.

use aqua_model::{DatasetKind, FieldType};
use aqua_standards::{DatasetSchema, RegionTable, fish_schema, names, ocean_schema};
use regex::Regex;

use crate::cleaners::{
    CleanerRegistry, LocalityCleaner, NumericCleaner, RegenerateEventIds, RequireEventIds,
    TimestampCleaner,
};
use crate::error::{CleanError, Result};
use crate::survival::SurvivalRule;

/// Pattern for `PREFIX####_##` event identifiers.
pub const STRICT_EVENT_ID_PATTERN: &str = r"^[A-Z]+[0-9]{4}_[0-9]{2}$";

/// How ocean event IDs are treated.
#[derive(Debug, Clone, Default)]
pub enum EventIdPolicy {
    /// Blank or placeholder IDs are replaced with synthetic ones.
    #[default]
    Regenerate,
    /// IDs must match the pattern; others become missing and their rows drop.
    Require(Regex),
}

impl EventIdPolicy {
    pub fn require(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Require)
            .map_err(|err| CleanError::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
    }

    /// [`EventIdPolicy::Require`] with [`STRICT_EVENT_ID_PATTERN`].
    pub fn strict() -> Result<Self> {
        Self::require(STRICT_EVENT_ID_PATTERN)
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Require(_))
    }
}

#[derive(Debug, Clone)]
pub struct OceanConfig {
    pub schema: DatasetSchema,
    pub event_ids: EventIdPolicy,
    pub event_id_prefix: String,
    /// Literal IDs treated as blank under [`EventIdPolicy::Regenerate`].
    pub event_id_placeholders: Vec<String>,
    pub regions: RegionTable,
    /// A row survives when any of these present columns has a value.
    pub critical_fields: Vec<String>,
}

impl OceanConfig {
    pub fn new(regions: RegionTable) -> Self {
        Self {
            schema: ocean_schema(),
            event_ids: EventIdPolicy::Regenerate,
            event_id_prefix: "OCEAN".to_string(),
            event_id_placeholders: vec!["0".to_string(), "nan".to_string()],
            regions,
            critical_fields: [
                names::TEMPERATURE,
                names::DEPTH,
                names::LATITUDE,
                names::LONGITUDE,
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Ocean defaults with the embedded locality table.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(RegionTable::embedded()?))
    }

    pub fn with_regions(mut self, regions: RegionTable) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_event_ids(mut self, policy: EventIdPolicy) -> Self {
        self.event_ids = policy;
        self
    }

    fn registry(&self) -> CleanerRegistry {
        let mut registry = CleanerRegistry::new();
        match &self.event_ids {
            EventIdPolicy::Regenerate => registry.register(Box::new(
                RegenerateEventIds::new(self.event_id_prefix.clone(), 1)
                    .with_placeholders(self.event_id_placeholders.iter().cloned()),
            )),
            EventIdPolicy::Require(pattern) => {
                registry.register(Box::new(RequireEventIds::new(pattern.clone())));
            }
        }
        registry.register(Box::new(LocalityCleaner::new(self.regions.clone())));
        register_typed_cleaners(&self.schema, &mut registry);
        registry
    }

    fn survival(&self) -> SurvivalRule {
        let rule = SurvivalRule::any_of(self.critical_fields.clone());
        if self.event_ids.is_strict() {
            rule.requiring([names::EVENT_ID])
        } else {
            rule
        }
    }
}

#[derive(Debug, Clone)]
pub struct FishConfig {
    pub schema: DatasetSchema,
    pub event_id_prefix: String,
    /// A row survives when any of these present columns has a value.
    pub taxonomic_fields: Vec<String>,
}

impl Default for FishConfig {
    fn default() -> Self {
        Self {
            schema: fish_schema(),
            event_id_prefix: "FISH".to_string(),
            taxonomic_fields: [
                names::SCIENTIFIC_NAME,
                names::FAMILY,
                names::GENUS,
                names::SPECIES,
                names::CLASS,
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl FishConfig {
    fn registry(&self) -> CleanerRegistry {
        let mut registry = CleanerRegistry::new();
        registry.register(Box::new(RegenerateEventIds::new(
            self.event_id_prefix.clone(),
            0,
        )));
        register_typed_cleaners(&self.schema, &mut registry);
        registry
    }

    fn survival(&self) -> SurvivalRule {
        SurvivalRule::any_of(self.taxonomic_fields.clone())
    }
}

/// Numeric and timestamp cleaners for every float/timestamp schema field.
fn register_typed_cleaners(schema: &DatasetSchema, registry: &mut CleanerRegistry) {
    for field in &schema.fields {
        match field.field_type {
            FieldType::Float => {
                registry.register(Box::new(NumericCleaner::new(field.name.clone(), field.range)));
            }
            FieldType::Timestamp => {
                registry.register(Box::new(TimestampCleaner::new(field.name.clone())));
            }
            FieldType::Identifier | FieldType::Category => {}
        }
    }
}

/// Configuration for one cleaning run.
#[derive(Debug, Clone)]
pub enum CleaningConfig {
    Ocean(OceanConfig),
    Fish(FishConfig),
}

impl CleaningConfig {
    /// Default configuration for a kind.
    pub fn for_kind(kind: DatasetKind) -> Result<Self> {
        Ok(match kind {
            DatasetKind::Ocean => Self::Ocean(OceanConfig::with_defaults()?),
            DatasetKind::Fish => Self::Fish(FishConfig::default()),
        })
    }

    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Ocean(_) => DatasetKind::Ocean,
            Self::Fish(_) => DatasetKind::Fish,
        }
    }

    pub fn schema(&self) -> &DatasetSchema {
        match self {
            Self::Ocean(config) => &config.schema,
            Self::Fish(config) => &config.schema,
        }
    }

    /// Switches the event ID policy. Only ocean datasets accept a strict policy.
    pub fn with_event_id_policy(self, policy: EventIdPolicy) -> Result<Self> {
        match self {
            Self::Ocean(config) => Ok(Self::Ocean(config.with_event_ids(policy))),
            Self::Fish(_) if policy.is_strict() => Err(CleanError::UnsupportedOption {
                option: "strict event IDs".to_string(),
                kind: DatasetKind::Fish,
            }),
            fish @ Self::Fish(_) => Ok(fish),
        }
    }

    /// Replaces the locality table. Fish datasets have no locality column.
    pub fn with_regions(self, regions: RegionTable) -> Result<Self> {
        match self {
            Self::Ocean(config) => Ok(Self::Ocean(config.with_regions(regions))),
            Self::Fish(_) => Err(CleanError::UnsupportedOption {
                option: "a locality table".to_string(),
                kind: DatasetKind::Fish,
            }),
        }
    }

    pub fn registry(&self) -> CleanerRegistry {
        match self {
            Self::Ocean(config) => config.registry(),
            Self::Fish(config) => config.registry(),
        }
    }

    pub fn survival(&self) -> SurvivalRule {
        match self {
            Self::Ocean(config) => config.survival(),
            Self::Fish(config) => config.survival(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ocean_registry_covers_every_cleaned_field() {
        let config = CleaningConfig::for_kind(DatasetKind::Ocean).unwrap();
        let registry = config.registry();
        let fields: Vec<&str> = registry.fields().collect();
        assert_eq!(
            fields,
            vec![
                names::EVENT_ID,
                names::LOCALITY,
                names::TEMPERATURE,
                names::DEPTH,
                names::LATITUDE,
                names::LONGITUDE,
                names::SALINITY,
                names::OXYGEN,
                names::VELOCITY,
                names::EVENT_DATE,
            ]
        );
    }

    #[test]
    fn fish_registry_only_touches_ids_and_quantity() {
        let config = CleaningConfig::for_kind(DatasetKind::Fish).unwrap();
        let registry = config.registry();
        let fields: Vec<&str> = registry.fields().collect();
        assert_eq!(fields, vec![names::EVENT_ID, names::ORGANISM_QUANTITY]);
    }

    #[test]
    fn strict_policy_is_rejected_for_fish() {
        let config = CleaningConfig::for_kind(DatasetKind::Fish).unwrap();
        let err = config
            .with_event_id_policy(EventIdPolicy::strict().unwrap())
            .unwrap_err();
        assert!(matches!(err, CleanError::UnsupportedOption { .. }));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = EventIdPolicy::require("([").unwrap_err();
        assert!(matches!(err, CleanError::InvalidPattern { .. }));
    }
}
