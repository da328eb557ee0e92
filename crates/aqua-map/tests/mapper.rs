use std::collections::BTreeSet;

use aqua_map::{ColumnMapper, map_columns, normalize_label};
use aqua_model::DatasetKind;
use aqua_standards::DatasetSchema;
use proptest::prelude::*;

fn owned(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|label| label.to_string()).collect()
}

#[test]
fn maps_typical_ocean_upload() {
    let schema = DatasetSchema::for_kind(DatasetKind::Ocean);
    let header = owned(&["EventID", "Temp_C", "Depth(m)", "Lat", "Long", "Remarks"]);
    let mapping = map_columns(&header, &schema.fields);

    assert_eq!(mapping.target_for("EventID"), Some("eventID"));
    assert_eq!(mapping.target_for("Temp_C"), Some("temperature_C"));
    assert_eq!(mapping.target_for("Depth(m)"), Some("DepthInMeters"));
    assert_eq!(mapping.target_for("Lat"), Some("decimalLatitude"));
    assert_eq!(mapping.target_for("Long"), Some("decimalLongitude"));
    assert_eq!(mapping.unmapped_columns, vec!["Remarks"]);
    // Ordered by schema position.
    assert_eq!(
        mapping.target_fields(),
        vec![
            "eventID",
            "temperature_C",
            "DepthInMeters",
            "decimalLatitude",
            "decimalLongitude"
        ]
    );
}

#[test]
fn maps_typical_fish_upload() {
    let schema = DatasetSchema::for_kind(DatasetKind::Fish);
    let header = owned(&[
        "Scientific Name",
        "family",
        "GENUS",
        "Organism Quantity",
        "Common name",
    ]);
    let mapping = map_columns(&header, &schema.fields);

    assert_eq!(mapping.target_for("Scientific Name"), Some("scientificName"));
    assert_eq!(mapping.target_for("family"), Some("Family"));
    assert_eq!(mapping.target_for("GENUS"), Some("Genus"));
    assert_eq!(mapping.target_for("Organism Quantity"), Some("organismQuantity"));
    assert_eq!(mapping.target_for("Common name"), None);
}

#[test]
fn country_column_is_not_taken_for_quantity() {
    let schema = DatasetSchema::for_kind(DatasetKind::Fish);
    let header = owned(&["scientificName", "Country", "organismQuantity"]);
    let mapping = map_columns(&header, &schema.fields);

    assert_eq!(mapping.source_for("organismQuantity"), Some("organismQuantity"));
    assert_eq!(mapping.target_for("Country"), None);
    assert_eq!(mapping.unmapped_columns, vec!["Country"]);
}

#[test]
fn nothing_matches_unrelated_header() {
    let schema = DatasetSchema::for_kind(DatasetKind::Ocean);
    let mapping = map_columns(&owned(&["foo", "bar", "baz"]), &schema.fields);
    assert!(mapping.is_empty());
    assert_eq!(mapping.unmapped_columns.len(), 3);
}

#[test]
fn mapping_serializes_for_reports() {
    let schema = DatasetSchema::for_kind(DatasetKind::Ocean);
    let mapping = ColumnMapper::new(&schema.fields)
        .map(&owned(&["Lat"]))
        .unwrap();
    let json = serde_json::to_value(&mapping).unwrap();
    assert_eq!(json["mappings"][0]["target_field"], "decimalLatitude");
    assert_eq!(json["mappings"][0]["origin"], "name");
}

proptest! {
    #[test]
    fn mapping_is_injective(labels in prop::collection::vec("[A-Za-z_ ()]{0,10}", 0..14)) {
        let schema = DatasetSchema::for_kind(DatasetKind::Ocean);
        let mapping = map_columns(&labels, &schema.fields);

        let targets: BTreeSet<&str> = mapping.mappings.iter().map(|m| m.target_field.as_str()).collect();
        prop_assert_eq!(targets.len(), mapping.len());
        let sources: BTreeSet<usize> = mapping.mappings.iter().map(|m| m.source_index).collect();
        prop_assert_eq!(sources.len(), mapping.len());
        prop_assert!(mapping.len() <= schema.len());
        prop_assert_eq!(mapping.len() + mapping.unmapped_columns.len(), labels.len());
    }

    #[test]
    fn mapping_ignores_label_order(
        labels in Just(vec![
            "eventID".to_string(),
            "locality".to_string(),
            "temperature_C".to_string(),
            "DepthInMeters".to_string(),
            "decimalLatitude".to_string(),
            "decimalLongitude".to_string(),
            "sea_water_salinity".to_string(),
            "oxygen_concentration_mgL".to_string(),
            "sea_water_velocity".to_string(),
            "eventDate".to_string(),
            "zz_unrelated".to_string(),
            "qqq".to_string(),
        ]).prop_shuffle()
    ) {
        let schema = DatasetSchema::for_kind(DatasetKind::Ocean);
        let mapping = map_columns(&labels, &schema.fields);
        for mapped in &mapping.mappings {
            prop_assert_eq!(&mapped.source_column, &mapped.target_field);
        }
        prop_assert_eq!(mapping.len(), schema.len());
    }

    #[test]
    fn normalizer_is_idempotent(label in "[A-Za-z0-9_() .-]{0,16}") {
        let once = normalize_label(&label);
        prop_assert_eq!(normalize_label(&once), once.clone());
    }
}
