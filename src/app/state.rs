//! Application state - core data structures and view selection
//!
//! This module contains the main App struct, the fixed menu of views and
//! the logic that applies a view to the dataset. Event handling is in the
//! handlers module.

use crate::data::{Dataset, DisplayCountry};
use crate::format::{format_number_for_language, parse_grouped, SUPPORTED_LANGUAGES};
use crate::query::QueryError;
use rust_i18n::t;

/// Active panel in the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivePanel {
    Menu,
    Table,
}

/// Table tab view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableTab {
    Data,  // Country rows
    Stats, // Aggregates for the current view
}

/// One selectable view over the dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// All countries translated for one language
    Language(&'static str),
    /// Countries within a population range (upper bound optional)
    Population { min: u64, max: Option<u64> },
    /// Countries of a continent with at least the given area in km²
    AreaAndContinent {
        continent: &'static str,
        min_area: u64,
    },
}

impl View {
    /// Subtitle line reflecting what is in the table
    pub fn subtitle(&self) -> String {
        match self {
            View::Language(language) => {
                t!("subtitle_language", language = language).to_string()
            }
            View::Population { min, max: None } => t!(
                "subtitle_population_min",
                min = format_number_for_language(*min, "English")
            )
            .to_string(),
            View::Population {
                min,
                max: Some(max),
            } => t!(
                "subtitle_population_range",
                min = format_number_for_language(*min, "English"),
                max = format_number_for_language(*max, "English")
            )
            .to_string(),
            View::AreaAndContinent {
                continent,
                min_area: 0,
            } => t!("subtitle_continent_all", continent = continent).to_string(),
            View::AreaAndContinent {
                continent,
                min_area,
            } => t!(
                "subtitle_area",
                continent = continent,
                min = format_number_for_language(*min_area, "English")
            )
            .to_string(),
        }
    }
}

/// One entry of the view menu
#[derive(Clone, Debug)]
pub struct MenuEntry {
    pub label: String,
    pub view: View,
}

/// The fixed menu: the 8 languages plus the canned filters
pub fn menu_entries() -> Vec<MenuEntry> {
    let mut entries: Vec<MenuEntry> = SUPPORTED_LANGUAGES
        .iter()
        .map(|&language| MenuEntry {
            label: language.to_string(),
            view: View::Language(language),
        })
        .collect();

    entries.push(MenuEntry {
        label: t!("menu_population_100m").to_string(),
        view: View::Population {
            min: 100_000_000,
            max: None,
        },
    });
    entries.push(MenuEntry {
        label: t!("menu_population_1m_2m").to_string(),
        view: View::Population {
            min: 1_000_000,
            max: Some(2_000_000),
        },
    });
    entries.push(MenuEntry {
        label: t!("menu_americas_1m_km2").to_string(),
        view: View::AreaAndContinent {
            continent: "Americas",
            min_area: 1_000_000,
        },
    });
    entries.push(MenuEntry {
        label: t!("menu_asia_all").to_string(),
        view: View::AreaAndContinent {
            continent: "Asia",
            min_area: 0,
        },
    });

    entries
}

/// Main application state
pub struct App {
    /// Country dataset, read-only after load
    pub dataset: Dataset,

    // === Menu ===
    /// Menu entries (fixed for the lifetime of the app)
    pub menu: Vec<MenuEntry>,
    /// Selected index in the menu
    pub menu_selected: usize,

    // === Table ===
    /// View currently shown in the table
    pub view: View,
    /// Rows of the current view
    pub rows: Vec<DisplayCountry>,
    /// Selected row in the table
    pub table_selected: usize,
    /// Current table tab
    pub table_tab: TableTab,

    // === UI State ===
    /// Active panel
    pub active_panel: ActivePanel,
    /// Should quit?
    pub should_quit: bool,
    /// Show help popup
    pub show_help: bool,
    /// Error message
    pub error: Option<String>,
    /// Success message
    pub message: Option<String>,
    /// Status message
    pub status: String,
}

impl App {
    /// Create new app over a loaded dataset
    pub fn new(dataset: Dataset, start_language: Option<&str>) -> Self {
        let language = start_language
            .and_then(|name| {
                SUPPORTED_LANGUAGES
                    .iter()
                    .find(|supported| **supported == name)
            })
            .copied()
            .unwrap_or("English");

        let menu = menu_entries();
        let menu_selected = menu
            .iter()
            .position(|entry| entry.view == View::Language(language))
            .unwrap_or(0);

        let mut app = Self {
            dataset,
            menu,
            menu_selected,
            view: View::Language(language),
            rows: Vec::new(),
            table_selected: 0,
            table_tab: TableTab::Data,
            active_panel: ActivePanel::Menu,
            should_quit: false,
            show_help: false,
            error: None,
            message: None,
            status: String::new(),
        };

        app.apply_view(View::Language(language));
        app.status = t!("status_countries", count = app.dataset.len()).to_string();
        app
    }

    /// Run the query behind a view and show its rows.
    /// On failure the previous rows stay and the error is surfaced.
    pub fn apply_view(&mut self, view: View) {
        let result: Result<Vec<DisplayCountry>, QueryError> = match view {
            View::Language(language) => self.dataset.by_language(language),
            View::Population { min, max } => self.dataset.by_population(min, max),
            View::AreaAndContinent {
                continent,
                min_area,
            } => self.dataset.by_area_and_continent(continent, min_area),
        };

        match result {
            Ok(rows) => {
                self.rows = rows;
                self.view = view;
                self.table_selected = 0;
                self.error = None;
                self.status = t!("status_rows", count = self.rows.len()).to_string();
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Apply the view under the menu cursor
    pub fn apply_selected_entry(&mut self) {
        if let Some(entry) = self.menu.get(self.menu_selected) {
            let view = entry.view;
            self.apply_view(view);
        }
    }

    /// Subtitle for the current view
    pub fn subtitle(&self) -> String {
        self.view.subtitle()
    }

    /// Language the current rows are translated to
    pub fn view_language(&self) -> &'static str {
        match self.view {
            View::Language(language) => language,
            _ => "English",
        }
    }

    // === Stats for the current view ===

    /// Sum of populations of the rows on screen
    pub fn total_population(&self) -> u64 {
        self.rows
            .iter()
            .map(|row| parse_grouped(&row.population))
            .sum()
    }

    /// Sum of areas of the rows on screen, in km²
    pub fn total_area(&self) -> u64 {
        self.rows
            .iter()
            .map(|row| parse_grouped(&row.area_in_km2))
            .sum()
    }

    /// Name of the most populous country on screen
    pub fn most_populous(&self) -> Option<&DisplayCountry> {
        self.rows
            .iter()
            .max_by_key(|row| parse_grouped(&row.population))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Dataset::embedded().unwrap(), None)
    }

    #[test]
    fn starts_with_english_view_over_full_dataset() {
        let app = app();
        assert_eq!(app.view, View::Language("English"));
        assert_eq!(app.rows.len(), app.dataset.len());
        assert!(app.error.is_none());
    }

    #[test]
    fn start_language_from_config_is_honored() {
        let app = App::new(Dataset::embedded().unwrap(), Some("Russian"));
        assert_eq!(app.view, View::Language("Russian"));
        // Unknown start language falls back to English
        let fallback = App::new(Dataset::embedded().unwrap(), Some("Klingon"));
        assert_eq!(fallback.view, View::Language("English"));
    }

    #[test]
    fn menu_covers_languages_and_filters() {
        let menu = menu_entries();
        assert_eq!(menu.len(), SUPPORTED_LANGUAGES.len() + 4);
        for (entry, &language) in menu.iter().zip(SUPPORTED_LANGUAGES) {
            assert_eq!(entry.view, View::Language(language));
        }
    }

    #[test]
    fn applying_a_filter_view_replaces_rows() {
        let mut app = app();
        app.apply_view(View::Population {
            min: 100_000_000,
            max: None,
        });
        assert!(!app.rows.is_empty());
        assert!(app.rows.len() < app.dataset.len());
        for row in &app.rows {
            assert!(crate::format::parse_grouped(&row.population) >= 100_000_000);
        }
    }

    #[test]
    fn apply_selected_entry_follows_menu_cursor() {
        let mut app = app();
        app.menu_selected = app.menu.len() - 1; // Asia (all)
        app.apply_selected_entry();
        assert!(app.rows.iter().all(|row| row.continent == "Asia"));
        assert_eq!(
            app.view,
            View::AreaAndContinent {
                continent: "Asia",
                min_area: 0
            }
        );
    }

    #[test]
    fn stats_aggregate_the_current_view() {
        let mut app = app();
        app.apply_view(View::AreaAndContinent {
            continent: "Americas",
            min_area: 1_000_000,
        });
        let expected_population: u64 = app
            .dataset
            .records()
            .iter()
            .filter(|r| r.continent == "Americas" && r.area_in_km2 >= 1_000_000)
            .map(|r| r.population)
            .sum();
        assert_eq!(app.total_population(), expected_population);
        assert!(app.total_area() >= 1_000_000 * app.rows.len() as u64);
        let top = app.most_populous().unwrap();
        assert_eq!(top.name, "United States");
    }
}
