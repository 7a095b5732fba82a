//! Splitters for alias lists, spoken languages and hair color.

use once_cell::sync::Lazy;
use regex::Regex;

/// Alias tokens that mean "no alias".
const ALIAS_STOPLIST: [&str; 3] = ["-", "none", "n/a"];

/// Number of language slots in the output schema.
pub const LANGUAGE_SLOTS: usize = 3;

static AKA_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)a/k/a").expect("valid regex"));
static ALIAS_DELIMITERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\saka\s|\s*\|\s*|,\s*|;\s*|\n+").expect("valid regex")
});
static LANGUAGE_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[,;/]|\s+and\s+").expect("valid regex"));
static HAIR_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[/(]|\s+and\s+").expect("valid regex"));

/// Count distinct alias entries. Missing or blank text counts as zero.
pub fn count_aliases(text: Option<&str>) -> u32 {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return 0;
    };

    let normalized = AKA_MARKER.replace_all(text, "aka");
    ALIAS_DELIMITERS
        .split(&normalized)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| !ALIAS_STOPLIST.iter().any(|stop| token.eq_ignore_ascii_case(stop)))
        .count() as u32
}

/// Split a language list into up to three slots, in the order written.
pub fn split_languages(text: &str) -> [Option<String>; LANGUAGE_SLOTS] {
    let mut slots: [Option<String>; LANGUAGE_SLOTS] = Default::default();
    let languages = LANGUAGE_DELIMITERS
        .split(text.trim())
        .map(str::trim)
        .filter(|l| !l.is_empty());
    for (slot, language) in slots.iter_mut().zip(languages) {
        *slot = Some(language.to_string());
    }
    slots
}

/// First hair color, without qualifiers such as "(dyed)" or "and gray".
pub fn first_hair_color(text: &str) -> Option<String> {
    HAIR_DELIMITERS
        .split(text.trim())
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_aliases() {
        assert_eq!(count_aliases(Some("John Doe a/k/a Johnny, JD")), 3);
        assert_eq!(count_aliases(Some("A | B | C; D")), 4);
        assert_eq!(count_aliases(Some("Jan Kowalski aka Jan K.")), 2);
        assert_eq!(count_aliases(Some("X A/K/A Y")), 2);
        assert_eq!(count_aliases(Some("First\nSecond\n\nThird")), 3);
    }

    #[test]
    fn test_count_aliases_empty_and_stoplist() {
        assert_eq!(count_aliases(None), 0);
        assert_eq!(count_aliases(Some("")), 0);
        assert_eq!(count_aliases(Some("   ")), 0);
        assert_eq!(count_aliases(Some("-")), 0);
        assert_eq!(count_aliases(Some("None")), 0);
        assert_eq!(count_aliases(Some("N/A, Bob")), 1);
    }

    #[test]
    fn test_split_languages() {
        assert_eq!(
            split_languages("English, Spanish and French"),
            [
                Some("English".to_string()),
                Some("Spanish".to_string()),
                Some("French".to_string())
            ]
        );
        assert_eq!(
            split_languages("Russian/Ukrainian"),
            [Some("Russian".to_string()), Some("Ukrainian".to_string()), None]
        );
        assert_eq!(
            split_languages("Farsi; Arabic; English; Turkish")[2],
            Some("English".to_string())
        );
        assert_eq!(split_languages(" , ;"), [None, None, None]);
    }

    #[test]
    fn test_first_hair_color() {
        assert_eq!(first_hair_color("Brown"), Some("Brown".to_string()));
        assert_eq!(first_hair_color("Black/Gray"), Some("Black".to_string()));
        assert_eq!(first_hair_color("Blond (dyed)"), Some("Blond".to_string()));
        assert_eq!(first_hair_color("Brown and Gray"), Some("Brown".to_string()));
        assert_eq!(first_hair_color("  "), None);
    }
}
