//! Language registry: the fixed set of selectable languages.

use crate::ui::Style;

/// A selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Lowercase short code (e.g. `en`).
    pub code: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
}

/// Supported language codes and their names.
pub const SUPPORTED_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "en", name: "English" },
    LanguageEntry { code: "es", name: "Spanish" },
    LanguageEntry { code: "fr", name: "French" },
    LanguageEntry { code: "de", name: "German" },
    LanguageEntry { code: "it", name: "Italian" },
    LanguageEntry { code: "pt", name: "Portuguese" },
    LanguageEntry { code: "ru", name: "Russian" },
    LanguageEntry { code: "ja", name: "Japanese" },
    LanguageEntry { code: "ko", name: "Korean" },
    LanguageEntry { code: "zh", name: "Chinese (Simplified)" },
    LanguageEntry { code: "ar", name: "Arabic" },
    LanguageEntry { code: "hi", name: "Hindi" },
    LanguageEntry { code: "bn", name: "Bengali" },
    LanguageEntry { code: "pa", name: "Punjabi" },
    LanguageEntry { code: "te", name: "Telugu" },
    LanguageEntry { code: "mr", name: "Marathi" },
    LanguageEntry { code: "ta", name: "Tamil" },
    LanguageEntry { code: "ur", name: "Urdu" },
    LanguageEntry { code: "gu", name: "Gujarati" },
];

/// Width of the left column in the language table.
const COLUMN_WIDTH: usize = 30;

/// Looks up a language by code.
///
/// The input is trimmed and lowercased first, so `" EN "` finds English.
pub fn lookup(code: &str) -> Option<&'static LanguageEntry> {
    let code = code.trim().to_lowercase();
    SUPPORTED_LANGUAGES.iter().find(|entry| entry.code == code)
}

/// Returns every language sorted by display name.
pub fn all() -> Vec<&'static LanguageEntry> {
    let mut entries: Vec<_> = SUPPORTED_LANGUAGES.iter().collect();
    entries.sort_by_key(|entry| entry.name);
    entries
}

/// Lays the sorted `code: name` labels out in two columns.
///
/// The left column holds the first half (rounded up) and is padded to a fixed width.
pub fn format_columns() -> Vec<String> {
    let labels: Vec<String> = all()
        .into_iter()
        .map(|entry| format!("{}: {}", entry.code, entry.name))
        .collect();

    let midpoint = labels.len().div_ceil(2);
    let (left, right) = labels.split_at(midpoint);

    left.iter()
        .enumerate()
        .map(|(i, label)| match right.get(i) {
            Some(other) => format!("{label:<COLUMN_WIDTH$}{other}"),
            None => label.clone(),
        })
        .collect()
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for entry in all() {
        println!("  {:4} {}", Style::code(entry.code), Style::secondary(entry.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_is_case_insensitive_for_every_code() {
        for entry in SUPPORTED_LANGUAGES {
            let lower = lookup(&entry.code.to_lowercase());
            let upper = lookup(&entry.code.to_uppercase());
            assert_eq!(lower, Some(entry));
            assert_eq!(lower, upper);
        }
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(lookup("  ja \n").map(|e| e.name), Some("Japanese"));
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("xx").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("english").is_none());
        assert!(lookup("zh-TW").is_none());
    }

    #[test]
    fn test_codes_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for entry in SUPPORTED_LANGUAGES {
            assert_eq!(entry.code, entry.code.to_lowercase());
            assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
        }
    }

    #[test]
    fn test_all_sorted_by_name() {
        let names: Vec<_> = all().iter().map(|e| e.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), SUPPORTED_LANGUAGES.len());
        assert_eq!(names.first(), Some(&"Arabic"));
    }

    #[test]
    fn test_format_columns_layout() {
        let rows = format_columns();
        // 19 entries: 10 on the left, 9 on the right
        assert_eq!(rows.len(), 10);
        assert!(rows[0].starts_with("ar: Arabic"));
        assert_eq!(rows[0].find("ko: Korean"), Some(COLUMN_WIDTH));
        assert_eq!(rows[9], "ja: Japanese");
    }
}
