//! Boolean detectors for distinguishing marks and reward amounts.

use once_cell::sync::Lazy;
use regex::Regex;

static MARK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\btattoo\w*|\bink\b",
        r"(?i)\bscars?\b",
        r"(?i)\bpierc(?:ed|ing|ings)\b",
        r"(?i)\bburn(?:ed|s|\s+marks?)\b",
        r"(?i)\bmissing\s+fingers?\b",
        r"(?i)\bfreckles?\b",
        r"(?i)\bmoles?\b",
        r"(?i)\bbirthmarks?\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static CURRENCY_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s*\d[\d,]*(?:\.\d{1,2})?").expect("valid regex"));

/// True when the text mentions any scar, tattoo or similar mark.
pub fn detect_marks(text: Option<&str>) -> bool {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => MARK_PATTERNS.iter().any(|re| re.is_match(t)),
        _ => false,
    }
}

/// True when the text carries a dollar amount, as reward notices do.
pub fn detect_currency_amount(text: Option<&str>) -> bool {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => CURRENCY_AMOUNT.is_match(t),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_detected() {
        assert!(detect_marks(Some("Tattoo of a dragon on left arm")));
        assert!(detect_marks(Some("tattoos on both hands")));
        assert!(detect_marks(Some("Scar on chin")));
        assert!(detect_marks(Some("Pierced ears")));
        assert!(detect_marks(Some("burn marks on neck")));
        assert!(detect_marks(Some("Missing finger on right hand")));
        assert!(detect_marks(Some("Freckles")));
        assert!(detect_marks(Some("mole above lip")));
        assert!(detect_marks(Some("Birthmark on back")));
    }

    #[test]
    fn test_marks_absent() {
        assert!(!detect_marks(None));
        assert!(!detect_marks(Some("")));
        assert!(!detect_marks(Some("Wears glasses")));
        // word boundaries keep "scarf" and "inkling" out
        assert!(!detect_marks(Some("Often wears a scarf")));
        assert!(!detect_marks(Some("no inkling")));
    }

    #[test]
    fn test_currency_amount() {
        assert!(detect_currency_amount(Some(
            "The FBI is offering a reward of up to $10,000 for information"
        )));
        assert!(detect_currency_amount(Some("reward of $ 5,000.00")));
        assert!(!detect_currency_amount(Some("Considered armed and dangerous")));
        assert!(!detect_currency_amount(Some("$")));
        assert!(!detect_currency_amount(None));
    }
}
