//! Coordinate to named-region lookup.
//!
//! Regions are inclusive latitude/longitude boxes checked in table order;
//! the first containing box names the locality. Coordinates outside every box
//! fall back to a label embedding the rounded coordinates.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::embedded::LOCALITIES_CSV;
use crate::error::{Result, StandardsError};

/// Locality assigned when coordinates are missing or not numeric.
pub const UNKNOWN_LOCALITY: &str = "Unknown";

/// One named bounding box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Region {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    fn validate(&self, source_name: &str) -> Result<()> {
        let invalid = |reason: &str| StandardsError::InvalidRegion {
            source_name: source_name.to_string(),
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("empty name"));
        }
        let bounds = [self.min_lat, self.max_lat, self.min_lon, self.max_lon];
        if bounds.iter().any(|value| !value.is_finite()) {
            return Err(invalid("non-finite bound"));
        }
        if self.min_lat > self.max_lat {
            return Err(invalid("min_lat is greater than max_lat"));
        }
        if self.min_lon > self.max_lon {
            return Err(invalid("min_lon is greater than max_lon"));
        }
        Ok(())
    }
}

/// Ordered region rules, first match wins.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl RegionTable {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// The compiled-in Indian coastal localities and surrounding seas.
    pub fn embedded() -> Result<Self> {
        Self::from_reader(LOCALITIES_CSV.as_bytes(), "embedded localities.csv")
    }

    /// Loads a replacement table from a CSV file with the embedded layout.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| StandardsError::io(path, source))?;
        Self::from_reader(file, &path.display().to_string())
    }

    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut regions = Vec::new();
        for record in reader.deserialize::<Region>() {
            let region = record.map_err(|err| StandardsError::Csv {
                source_name: source_name.to_string(),
                message: err.to_string(),
            })?;
            region.validate(source_name)?;
            regions.push(region);
        }
        if regions.is_empty() {
            return Err(StandardsError::EmptyRegionTable {
                source_name: source_name.to_string(),
            });
        }
        Ok(Self { regions })
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Names the region containing the coordinates, or
    /// `Coordinates_{lat}_{lon}` rounded to one decimal place.
    pub fn locate(&self, lat: f64, lon: f64) -> String {
        if !lat.is_finite() || !lon.is_finite() {
            return UNKNOWN_LOCALITY.to_string();
        }
        self.regions
            .iter()
            .find(|region| region.contains(lat, lon))
            .map(|region| region.name.clone())
            .unwrap_or_else(|| format!("Coordinates_{lat:.1}_{lon:.1}"))
    }

    /// Like [`Self::locate`], with missing coordinates mapped to
    /// [`UNKNOWN_LOCALITY`].
    pub fn locate_optional(&self, lat: Option<f64>, lon: Option<f64>) -> String {
        match (lat, lon) {
            (Some(lat), Some(lon)) => self.locate(lat, lon),
            _ => UNKNOWN_LOCALITY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RegionTable {
        RegionTable::embedded().expect("embedded table parses")
    }

    #[test]
    fn embedded_table_keeps_priority_order() {
        let table = table();
        let names: Vec<&str> = table
            .regions()
            .iter()
            .map(|region| region.name.as_str())
            .collect();
        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "Mumbai");
        assert_eq!(names[13], "Daman");
        assert_eq!(&names[14..], ["Bay of Bengal", "Arabian Sea", "Indian Ocean"]);
    }

    #[test]
    fn coastal_boxes_win_over_seas() {
        let table = table();
        assert_eq!(table.locate(19.0, 72.9), "Mumbai");
        assert_eq!(table.locate(13.05, 80.25), "Chennai");
        assert_eq!(table.locate(11.4, 92.8), "Port Blair (Andaman)");
        // Inside the Bay of Bengal box but no coastal box.
        assert_eq!(table.locate(15.0, 88.0), "Bay of Bengal");
        assert_eq!(table.locate(5.0, 66.0), "Indian Ocean");
    }

    #[test]
    fn bounds_are_inclusive() {
        let table = table();
        assert_eq!(table.locate(18.9, 72.8), "Mumbai");
        assert_eq!(table.locate(19.1, 73.0), "Mumbai");
    }

    #[test]
    fn outside_every_box_formats_coordinates() {
        let table = table();
        assert_eq!(table.locate(51.5074, -0.1278), "Coordinates_51.5_-0.1");
        assert_eq!(table.locate(-33.86, 151.21), "Coordinates_-33.9_151.2");
    }

    #[test]
    fn missing_or_non_finite_coordinates_are_unknown() {
        let table = table();
        assert_eq!(table.locate_optional(None, Some(72.9)), UNKNOWN_LOCALITY);
        assert_eq!(table.locate_optional(Some(19.0), None), UNKNOWN_LOCALITY);
        assert_eq!(table.locate(f64::NAN, 72.9), UNKNOWN_LOCALITY);
    }

    #[test]
    fn rejects_inverted_boxes() {
        let csv = "name,min_lat,max_lat,min_lon,max_lon\nBad,10,5,0,1\n";
        let err = RegionTable::from_reader(csv.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, StandardsError::InvalidRegion { .. }));
    }

    #[test]
    fn rejects_empty_tables() {
        let csv = "name,min_lat,max_lat,min_lon,max_lon\n";
        let err = RegionTable::from_reader(csv.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, StandardsError::EmptyRegionTable { .. }));
    }
}
