//! The immutable vehicle catalog backing every recommendation query.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::VehicleRecord;
use crate::util::{assets, paths};

/// Environment override for the catalog location.
pub const CATALOG_PATH_VAR: &str = "CAR_CATALOG_PATH";

/// The full catalog, loaded once and read-only afterwards. Row order is the
/// original file order and is preserved across loads.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    records: Vec<VehicleRecord>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Backing catalog file missing or unreadable.
    #[error("catalog unavailable at {path}: {source}")]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Backing catalog file exists but does not parse as vehicle rows.
    #[error("catalog at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Catalog {
    /// Load the catalog from a JSON array of vehicle rows.
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read(path).map_err(|source| CatalogError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&data, path)?;
        println!(
            "[catalog] Loaded {} vehicles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load the catalog from the default location chain:
    /// `CAR_CATALOG_PATH` override, then the platform data directory, then
    /// the embedded reference catalog.
    pub fn load_default() -> Result<Self, CatalogError> {
        if let Some(path) = paths::env_override(CATALOG_PATH_VAR) {
            return Self::load_from_path(&path);
        }
        if let Some(path) = paths::data_file(assets::CATALOG_ASSET) {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }
        let catalog = Self::from_json(
            assets::embedded_catalog().as_ref(),
            Path::new("embedded:catalog.json"),
        )?;
        println!("[catalog] Loaded {} vehicles (embedded)", catalog.len());
        Ok(catalog)
    }

    fn from_json(data: &[u8], path: &Path) -> Result<Self, CatalogError> {
        let records: Vec<VehicleRecord> =
            serde_json::from_slice(data).map_err(|source| CatalogError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct brands, sorted. Hosts use these to populate filter menus.
    pub fn brands(&self) -> Vec<String> {
        self.distinct(|r| &r.features.brand)
    }

    pub fn cities(&self) -> Vec<String> {
        self.distinct(|r| &r.features.city)
    }

    pub fn conditions(&self) -> Vec<String> {
        self.distinct(|r| &r.features.condition)
    }

    pub fn body_types(&self) -> Vec<String> {
        self.distinct(|r| &r.features.body_type)
    }

    pub fn fuels(&self) -> Vec<String> {
        self.distinct(|r| &r.features.fuel)
    }

    pub fn transmissions(&self) -> Vec<String> {
        self.distinct(|r| &r.features.transmission)
    }

    /// (oldest, newest) model year present, if the catalog is non-empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.features.year).min()?;
        let max = self.records.iter().map(|r| r.features.year).max()?;
        Some((min, max))
    }

    /// Highest mileage present, if the catalog is non-empty.
    pub fn max_mileage_km(&self) -> Option<u32> {
        self.records.iter().map(|r| r.features.mileage_km).max()
    }

    fn distinct(&self, field: impl Fn(&VehicleRecord) -> &String) -> Vec<String> {
        let mut values: Vec<String> = self.records.iter().map(|r| field(r).clone()).collect();
        values.sort();
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {"brand":"Toyota","model":"Yaris","year":2018,"mileage_km":60000,
         "condition":"Usado","body_type":"Sedan","transmission":"Manual",
         "fuel":"Gasolina","engine_cc":1600,"city":"Lima","price_usd":12000.0},
        {"brand":"Kia","model":"Rio","year":2016,"mileage_km":85000,
         "condition":"Usado","body_type":"Hatchback","transmission":"Manual",
         "fuel":"Gasolina","engine_cc":1400,"city":"Arequipa","price_usd":9800.0},
        {"brand":"Toyota","model":"RAV4","year":2021,"mileage_km":20000,
         "condition":"Usado","body_type":"SUV","transmission":"Automática",
         "fuel":"Gasolina","engine_cc":2000,"city":"Lima","price_usd":27500.0}
    ]"#;

    #[test]
    fn load_preserves_row_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.records()[0].features.model, "Yaris");
        assert_eq!(catalog.records()[1].features.model, "Rio");
        assert_eq!(catalog.records()[2].features.model, "RAV4");
    }

    #[test]
    fn repeated_loads_are_equivalent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let first = Catalog::load_from_path(file.path()).unwrap();
        let second = Catalog::load_from_path(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let err = Catalog::load_from_path(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::DataUnavailable { .. }));
    }

    #[test]
    fn corrupt_file_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ]").unwrap();

        let err = Catalog::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn missing_column_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"brand":"Toyota","year":2018}]"#).unwrap();

        let err = Catalog::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn distinct_helpers_sort_and_dedup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.brands(), vec!["Kia", "Toyota"]);
        assert_eq!(catalog.cities(), vec!["Arequipa", "Lima"]);
        assert_eq!(catalog.conditions(), vec!["Usado"]);
        assert_eq!(catalog.body_types(), vec!["Hatchback", "SUV", "Sedan"]);
        assert_eq!(catalog.fuels(), vec!["Gasolina"]);
        assert_eq!(catalog.transmissions(), vec!["Automática", "Manual"]);
        assert_eq!(catalog.year_range(), Some((2016, 2021)));
        assert_eq!(catalog.max_mileage_km(), Some(85_000));
    }

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::from_json(
            assets::embedded_catalog().as_ref(),
            Path::new("embedded:catalog.json"),
        )
        .unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.records().iter().all(|r| r.price_usd > 0.0));
    }
}
