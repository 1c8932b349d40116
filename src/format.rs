//! Language codes and locale-aware number formatting

use num_format::{Locale, ToFormattedString};

/// Language names the dataset carries translations for
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "English", "Arabic", "Chinese", "French", "Hindi", "Korean", "Japanese", "Russian",
];

/// Map a full language name to its 2-letter code, or None if unsupported.
///
/// This is a lookup, not a validation gate: unknown names are simply
/// unmapped rather than an error.
pub fn lang_code_for_language(language: &str) -> Option<&'static str> {
    match language {
        "English" => Some("en"),
        "Arabic" => Some("ar"),
        "Chinese" => Some("zh"),
        "French" => Some("fr"),
        "Hindi" => Some("hi"),
        "Korean" => Some("ko"),
        "Japanese" => Some("ja"),
        "Russian" => Some("ru"),
        _ => None,
    }
}

/// CLDR locale for a 2-letter code
fn locale_for_code(code: &str) -> Locale {
    match code {
        "ar" => Locale::ar,
        "zh" => Locale::zh,
        "fr" => Locale::fr,
        "hi" => Locale::hi,
        "ko" => Locale::ko,
        "ja" => Locale::ja,
        "ru" => Locale::ru,
        _ => Locale::en,
    }
}

/// Format a number with the digit grouping of the given language.
///
/// Western 3-digit grouping for most languages (with locale-specific
/// separators), Indian 2+3 grouping for Hindi. An unsupported language
/// falls back to English grouping; the translator validates the language
/// before any number reaches this point.
pub fn format_number_for_language(number: u64, language: &str) -> String {
    let locale = lang_code_for_language(language)
        .map(locale_for_code)
        .unwrap_or(Locale::en);
    number.to_formatted_string(&locale)
}

/// Parse a grouped digit string back to a number.
///
/// Group separators vary by locale (comma, space, U+00A0), so everything
/// that is not an ASCII digit is dropped before parsing. Filters must
/// always compare numerically, never against the formatted string.
pub fn parse_grouped(value: &str) -> u64 {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_supported_languages_resolve() {
        let expected = [
            ("English", "en"),
            ("Arabic", "ar"),
            ("Chinese", "zh"),
            ("French", "fr"),
            ("Hindi", "hi"),
            ("Korean", "ko"),
            ("Japanese", "ja"),
            ("Russian", "ru"),
        ];
        for (language, code) in expected {
            assert_eq!(lang_code_for_language(language), Some(code));
        }
    }

    #[test]
    fn unsupported_languages_have_no_code() {
        assert_eq!(lang_code_for_language("German"), None);
        assert_eq!(lang_code_for_language("Klingon"), None);
        assert_eq!(lang_code_for_language("english"), None);
        assert_eq!(lang_code_for_language(""), None);
    }

    #[test]
    fn english_uses_comma_grouping() {
        assert_eq!(format_number_for_language(35530081, "English"), "35,530,081");
        assert_eq!(format_number_for_language(999, "English"), "999");
        assert_eq!(format_number_for_language(0, "English"), "0");
    }

    #[test]
    fn russian_groups_with_non_breaking_space() {
        assert_eq!(format_number_for_language(652230, "Russian"), "652\u{a0}230");
    }

    #[test]
    fn hindi_uses_lakh_crore_grouping() {
        assert_eq!(format_number_for_language(652230, "Hindi"), "6,52,230");
        assert_eq!(format_number_for_language(35530081, "Hindi"), "3,55,30,081");
    }

    #[test]
    fn parse_grouped_inverts_formatting() {
        for language in SUPPORTED_LANGUAGES {
            let formatted = format_number_for_language(9984670, language);
            assert_eq!(parse_grouped(&formatted), 9984670, "language {language}");
        }
    }

    #[test]
    fn parse_grouped_handles_plain_and_empty_input() {
        assert_eq!(parse_grouped("123456"), 123456);
        assert_eq!(parse_grouped(""), 0);
    }
}
