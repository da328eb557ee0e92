use std::io::Write;

use aqua_model::{DatasetKind, FieldType};
use aqua_standards::{DatasetSchema, RegionTable, StandardsError, names};

#[test]
fn ocean_schema_lists_fields_in_priority_order() {
    let schema = DatasetSchema::for_kind(DatasetKind::Ocean);
    assert_eq!(
        schema.field_names(),
        vec![
            "eventID",
            "locality",
            "temperature_C",
            "DepthInMeters",
            "decimalLatitude",
            "decimalLongitude",
            "sea_water_salinity",
            "oxygen_concentration_mgL",
            "sea_water_velocity",
            "eventDate",
        ]
    );
    let temperature = schema.field(names::TEMPERATURE).unwrap();
    let range = temperature.range.unwrap();
    assert_eq!((range.min, range.max), (Some(-5.0), Some(50.0)));
    assert_eq!(
        schema.field(names::EVENT_DATE).unwrap().field_type,
        FieldType::Timestamp
    );
}

#[test]
fn fish_schema_lists_fields_in_priority_order() {
    let schema = DatasetSchema::for_kind(DatasetKind::Fish);
    assert_eq!(schema.len(), 11);
    assert_eq!(schema.field_names()[0], "eventID");
    assert_eq!(schema.field_names()[10], "organismQuantity");
    let quantity = schema.field(names::ORGANISM_QUANTITY).unwrap();
    assert!(quantity.range.unwrap().contains(0.0));
    assert!(!quantity.range.unwrap().contains(-1.0));
}

#[test]
fn region_table_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,min_lat,max_lat,min_lon,max_lon").unwrap();
    writeln!(file, "Harbour, 1.0, 2.0, 3.0, 4.0").unwrap();
    let table = RegionTable::from_path(file.path()).unwrap();
    assert_eq!(table.locate(1.5, 3.5), "Harbour");
    assert_eq!(table.locate(0.0, 0.0), "Coordinates_0.0_0.0");
}

#[test]
fn region_table_reports_missing_file() {
    let err = RegionTable::from_path(std::path::Path::new("/no/such/regions.csv")).unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
}

#[test]
fn region_table_reports_bad_numbers() {
    let csv = "name,min_lat,max_lat,min_lon,max_lon\nX,north,2,3,4\n";
    let err = RegionTable::from_reader(csv.as_bytes(), "inline").unwrap_err();
    assert!(matches!(err, StandardsError::Csv { .. }));
}
