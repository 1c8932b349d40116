//! Queries over the country dataset
//!
//! Every query is a pure, stateless pass over the dataset: translate each
//! record for a language, or translate to English and filter on a parsed
//! numeric field. Results preserve dataset order and are freshly allocated.

use crate::data::{CountryRecord, Dataset, DisplayCountry};
use crate::format::{format_number_for_language, parse_grouped};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The requested language is not a key of the record's name map
    #[error("Unrecognized language name: {0}")]
    UnrecognizedLanguage(String),
}

/// Translate one record into a display copy for the given language.
///
/// The source record is never touched; on an unknown language the whole
/// call fails rather than producing a partial result.
pub fn country_for_language(
    country: &CountryRecord,
    language: &str,
) -> Result<DisplayCountry, QueryError> {
    let name = country
        .name
        .get(language)
        .ok_or_else(|| QueryError::UnrecognizedLanguage(language.to_string()))?;

    Ok(DisplayCountry {
        code: country.code.clone(),
        continent: country.continent.clone(),
        area_in_km2: format_number_for_language(country.area_in_km2, language),
        population: format_number_for_language(country.population, language),
        capital: country.capital.clone(),
        name: name.clone(),
    })
}

impl Dataset {
    /// All countries translated for the given language, in dataset order
    pub fn by_language(&self, language: &str) -> Result<Vec<DisplayCountry>, QueryError> {
        self.records()
            .iter()
            .map(|country| country_for_language(country, language))
            .collect()
    }

    /// Countries with population in `[min_population, max_population]`,
    /// upper bound unconstrained when `max_population` is None.
    /// English names are used for filtered views.
    pub fn by_population(
        &self,
        min_population: u64,
        max_population: Option<u64>,
    ) -> Result<Vec<DisplayCountry>, QueryError> {
        let countries = self.by_language("English")?;
        Ok(countries
            .into_iter()
            .filter(|country| {
                let population = parse_grouped(&country.population);
                population >= min_population
                    && max_population.map_or(true, |max| population <= max)
            })
            .collect())
    }

    /// Countries of the given continent with area of at least `min_area` km².
    /// The formatted area is parsed back to a number before comparing.
    pub fn by_area_and_continent(
        &self,
        continent: &str,
        min_area: u64,
    ) -> Result<Vec<DisplayCountry>, QueryError> {
        let countries = self.by_language("English")?;
        Ok(countries
            .into_iter()
            .filter(|country| {
                country.continent == continent && parse_grouped(&country.area_in_km2) >= min_area
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn names(english: &str) -> BTreeMap<String, String> {
        let translations = [
            ("English", english.to_string()),
            ("Arabic", format!("{english} (ar)")),
            ("Chinese", format!("{english} (zh)")),
            ("French", format!("{english} (fr)")),
            ("Hindi", format!("{english} (hi)")),
            ("Korean", format!("{english} (ko)")),
            ("Japanese", format!("{english} (ja)")),
            ("Russian", format!("{english} (ru)")),
        ];
        translations
            .into_iter()
            .map(|(language, name)| (language.to_string(), name))
            .collect()
    }

    fn record(code: &str, continent: &str, area: u64, population: u64, english: &str) -> CountryRecord {
        CountryRecord {
            code: code.to_string(),
            continent: continent.to_string(),
            area_in_km2: area,
            population,
            capital: format!("Capital of {english}"),
            name: names(english),
        }
    }

    fn fixture() -> Dataset {
        Dataset::from_records(vec![
            record("AF", "Asia", 652230, 35530081, "Afghanistan"),
            record("CA", "Americas", 9984670, 36624199, "Canada"),
            record("CL", "Americas", 756102, 17789267, "Chile"),
            record("CN", "Asia", 9596960, 1379302771, "China"),
            record("EE", "Europe", 45228, 1251581, "Estonia"),
            record("IN", "Asia", 3287263, 1281935911, "India"),
        ])
        .unwrap()
    }

    #[test]
    fn translates_one_record() {
        let afghanistan = record("AF", "Asia", 652230, 35530081, "Afghanistan");
        let display = country_for_language(&afghanistan, "Korean").unwrap();
        assert_eq!(display.code, "AF");
        assert_eq!(display.continent, "Asia");
        assert_eq!(display.capital, "Capital of Afghanistan");
        assert_eq!(display.name, "Afghanistan (ko)");
        assert_eq!(display.area_in_km2, "652,230");
        assert_eq!(display.population, "35,530,081");
    }

    #[test]
    fn translation_never_mutates_the_record() {
        let before = record("AF", "Asia", 652230, 35530081, "Afghanistan");
        let after = before.clone();
        country_for_language(&after, "Russian").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_language_fails() {
        let afghanistan = record("AF", "Asia", 652230, 35530081, "Afghanistan");
        let err = country_for_language(&afghanistan, "Klingon").unwrap_err();
        assert_eq!(err, QueryError::UnrecognizedLanguage("Klingon".to_string()));
    }

    #[test]
    fn by_language_translates_every_record_in_order() {
        let dataset = fixture();
        let countries = dataset.by_language("English").unwrap();
        assert_eq!(countries.len(), dataset.len());
        let expected: Vec<&str> = dataset
            .records()
            .iter()
            .map(|r| r.name["English"].as_str())
            .collect();
        let actual: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn by_language_propagates_unrecognized_language() {
        let err = fixture().by_language("German").unwrap_err();
        assert_eq!(err, QueryError::UnrecognizedLanguage("German".to_string()));
    }

    #[test]
    fn by_population_open_upper_bound() {
        let countries = fixture().by_population(100_000_000, None).unwrap();
        let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CN", "IN"]);
    }

    #[test]
    fn by_population_bounds_are_inclusive() {
        let dataset = fixture();
        let countries = dataset.by_population(1_000_000, Some(2_000_000)).unwrap();
        let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["EE"]);

        // Exact boundary values stay included
        let exact = dataset.by_population(1251581, Some(1251581)).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].code, "EE");
    }

    #[test]
    fn by_population_uses_english_names() {
        let countries = fixture().by_population(0, None).unwrap();
        assert_eq!(countries[0].name, "Afghanistan");
        assert_eq!(countries[0].population, "35,530,081");
    }

    #[test]
    fn by_area_and_continent_filters_both_criteria() {
        let dataset = fixture();

        let americas = dataset.by_area_and_continent("Americas", 1_000_000).unwrap();
        let codes: Vec<&str> = americas.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CA"]);

        // min_area 0 keeps every record of the continent
        let asia = dataset.by_area_and_continent("Asia", 0).unwrap();
        let codes: Vec<&str> = asia.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["AF", "CN", "IN"]);
    }

    #[test]
    fn by_area_and_continent_compares_numerically() {
        // "756,102" < "9,596,960" as strings would be false; numeric parsing
        // must keep Chile out of a 1M km² filter and China in.
        let dataset = fixture();
        let asia = dataset.by_area_and_continent("Asia", 1_000_000).unwrap();
        let codes: Vec<&str> = asia.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CN", "IN"]);
        let americas = dataset.by_area_and_continent("Americas", 756_103).unwrap();
        let codes: Vec<&str> = americas.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CA"]);
    }

    #[test]
    fn unknown_continent_yields_empty_result() {
        let countries = fixture().by_area_and_continent("Atlantis", 0).unwrap();
        assert!(countries.is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let dataset = fixture();
        assert_eq!(
            dataset.by_language("Japanese").unwrap(),
            dataset.by_language("Japanese").unwrap()
        );
        assert_eq!(
            dataset.by_population(1_000_000, Some(2_000_000)).unwrap(),
            dataset.by_population(1_000_000, Some(2_000_000)).unwrap()
        );
        assert_eq!(
            dataset.by_area_and_continent("Asia", 0).unwrap(),
            dataset.by_area_and_continent("Asia", 0).unwrap()
        );
    }
}
