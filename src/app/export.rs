//! Export functionality for the current view

use crate::app::App;
use anyhow::Result;
use rust_i18n::t;
use std::path::Path;

/// Column order used by both export formats
const EXPORT_HEADERS: &[&str] = &[
    "code",
    "name",
    "continent",
    "capital",
    "areaInKm2",
    "population",
];

impl App {
    /// Export the current view to a CSV file
    pub fn export_view_csv(&mut self) {
        if self.rows.is_empty() {
            self.error = Some(t!("no_rows_to_export").to_string());
            return;
        }

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("countries_{}.csv", timestamp);

        match self.export_csv(Path::new(&filename)) {
            Ok(()) => {
                self.message = Some(
                    t!("exported_rows", count = self.rows.len(), filename = filename).to_string(),
                );
            }
            Err(e) => {
                self.error = Some(t!("export_failed", error = e.to_string()).to_string());
            }
        }
    }

    /// Export the current view to a JSON file
    pub fn export_view_json(&mut self) {
        if self.rows.is_empty() {
            self.error = Some(t!("no_rows_to_export").to_string());
            return;
        }

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("countries_{}.json", timestamp);

        match self.export_json(Path::new(&filename)) {
            Ok(()) => {
                self.message = Some(
                    t!("exported_rows", count = self.rows.len(), filename = filename).to_string(),
                );
            }
            Err(e) => {
                self.error = Some(t!("export_failed", error = e.to_string()).to_string());
            }
        }
    }

    /// Write the current view to a CSV file
    fn export_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(EXPORT_HEADERS)?;
        for row in &self.rows {
            wtr.write_record([
                row.code.as_str(),
                row.name.as_str(),
                row.continent.as_str(),
                row.capital.as_str(),
                row.area_in_km2.as_str(),
                row.population.as_str(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the current view to a JSON file
    fn export_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.rows)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn app() -> App {
        App::new(Dataset::embedded().unwrap(), None)
    }

    #[test]
    fn csv_export_writes_header_and_one_line_per_row() {
        let app = app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.csv");
        app.export_csv(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "code,name,continent,capital,areaInKm2,population"
        );
        assert_eq!(lines.count(), app.rows.len());
    }

    #[test]
    fn json_export_round_trips_the_rows() {
        let app = app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.json");
        app.export_json(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), app.rows.len());
        assert_eq!(rows[0]["code"], app.rows[0].code.as_str());
        assert_eq!(rows[0]["population"], app.rows[0].population.as_str());
    }
}
