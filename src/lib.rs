//! Country TUI - Library
//! Terminal explorer for world country data

#[macro_use]
extern crate rust_i18n;

// Initialize i18n with locales from the "locales" directory
// Fallback to English if translation not found
i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod data;
pub mod format;
pub mod query;
pub mod ui;

/// Available locales in the application
const AVAILABLE_LOCALES: &[&str] = &["en", "fr"];

/// Initialize the locale based on config or system settings
pub fn init_locale(config_locale: Option<&str>) {
    let locale = if let Some(loc) = config_locale {
        loc.to_string()
    } else {
        // Detect system locale
        sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
    };

    // Normalize locale:
    // - Replace underscore with dash (fr_FR -> fr-FR)
    // - Remove encoding suffix (.UTF-8, .utf8, etc)
    let normalized = locale
        .replace('_', "-")
        .split('.')
        .next()
        .unwrap_or("en")
        .to_string();

    // Handle special cases like "C" or "POSIX" which mean default/English
    let normalized = if normalized == "C" || normalized == "POSIX" {
        "en".to_string()
    } else {
        normalized
    };

    // Try to find exact match or fallback to base language
    let final_locale = if AVAILABLE_LOCALES.contains(&normalized.as_str()) {
        normalized
    } else if let Some(base) = normalized.split('-').next() {
        // Try base language (e.g., "fr" from "fr-CA")
        if AVAILABLE_LOCALES.contains(&base) {
            base.to_string()
        } else {
            // Check if any available locale starts with the base
            AVAILABLE_LOCALES
                .iter()
                .find(|l| l.starts_with(base))
                .map(|s| s.to_string())
                .unwrap_or_else(|| "en".to_string())
        }
    } else {
        "en".to_string()
    };

    // Set the locale
    rust_i18n::set_locale(&final_locale);
}
