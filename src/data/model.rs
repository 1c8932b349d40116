//! Country record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the country dataset, as loaded from JSON.
///
/// Records are read-only after loading; every query allocates fresh
/// output values instead of writing back into the dataset.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CountryRecord {
    /// ISO-style 2-letter identifier, unique per record
    pub code: String,
    pub continent: String,
    #[serde(rename = "areaInKm2")]
    pub area_in_km2: u64,
    pub population: u64,
    pub capital: String,
    /// Display name keyed by language name ("English", "Arabic", ...)
    pub name: BTreeMap<String, String>,
}

/// Presentation-ready projection of a record for one language.
///
/// Numbers are locale-grouped digit strings and `name` is resolved to a
/// single translation.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DisplayCountry {
    pub code: String,
    pub continent: String,
    #[serde(rename = "areaInKm2")]
    pub area_in_km2: String,
    pub population: String,
    pub capital: String,
    pub name: String,
}
