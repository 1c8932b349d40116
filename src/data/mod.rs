//! Country dataset loading and validation
//!
//! The dataset is an ordered, read-only collection of country records. It
//! is loaded once at startup, either from a JSON file named in the config
//! or from the dataset bundled with the binary, and passed explicitly to
//! everything that reads it.

mod model;

pub use model::{CountryRecord, DisplayCountry};

use crate::format::SUPPORTED_LANGUAGES;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Dataset bundled with the binary, used when no path is configured
const EMBEDDED_DATASET: &str = include_str!("../../assets/countries.json");

/// Ordered, read-only collection of country records
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    /// Build a dataset from already-parsed records, validating them
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self> {
        validate(&records)?;
        Ok(Self { records })
    }

    /// Load the dataset bundled with the binary
    pub fn embedded() -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_str(EMBEDDED_DATASET)
            .context("Failed to parse embedded dataset")?;
        Self::from_records(records)
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
        let records: Vec<CountryRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse dataset file {}", path.display()))?;
        Self::from_records(records)
    }

    /// Load from the given path, or fall back to the embedded dataset
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Records in dataset order
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Every record must carry a name in all supported languages
fn validate(records: &[CountryRecord]) -> Result<()> {
    for record in records {
        for language in SUPPORTED_LANGUAGES {
            if !record.name.contains_key(*language) {
                bail!("Country {} is missing its {} name", record.code, language);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads_and_validates() {
        let dataset = Dataset::embedded().unwrap();
        assert!(!dataset.is_empty());
        assert_eq!(dataset.len(), dataset.records().len());
    }

    #[test]
    fn embedded_dataset_codes_are_unique() {
        let dataset = Dataset::embedded().unwrap();
        let mut codes: Vec<&str> = dataset.records().iter().map(|r| r.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), dataset.len());
    }

    #[test]
    fn record_missing_a_language_is_rejected() {
        let dataset = Dataset::embedded().unwrap();
        let mut records = dataset.records().to_vec();
        records[0].name.remove("Korean");
        let err = Dataset::from_records(records).unwrap_err();
        assert!(err.to_string().contains("Korean"));
    }

    #[test]
    fn load_without_path_uses_embedded_dataset() {
        let dataset = Dataset::load(None).unwrap();
        assert_eq!(dataset.len(), Dataset::embedded().unwrap().len());
    }

    #[test]
    fn load_from_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json");
        let records = Dataset::embedded().unwrap().records().to_vec();
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let dataset = Dataset::from_path(&path).unwrap();
        assert_eq!(dataset.records(), records.as_slice());
    }
}
