//! Human height text to centimeters.

use once_cell::sync::Lazy;
use regex::Regex;

use super::round1;

pub const CM_PER_INCH: f64 = 2.54;

/// Largest height accepted as a real measurement.
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Height rules in priority order. The first rule that produces a value
/// wins; a rule that matches syntactically but rejects its value lets the
/// next rule try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightRule {
    Centimeters,
    Meters,
    Inches,
    FeetInches,
    BareNumber,
}

pub const HEIGHT_RULES: [HeightRule; 5] = [
    HeightRule::Centimeters,
    HeightRule::Meters,
    HeightRule::Inches,
    HeightRule::FeetInches,
    HeightRule::BareNumber,
];

static CM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{2,3}(?:\.\d+)?)\s*cm\b").expect("valid regex"));
static METERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d(?:\.\d{1,2})?)\s*m\b").expect("valid regex"));
static INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\d{2,3}(?:\.\d+)?)\s*(?:(?:inches|inch|in)\b|")"#).expect("valid regex")
});
static FOOT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d\s*(?:ft|foot|feet)|\b(?:ft|foot|feet)\b|'").expect("valid regex"));
static FEET_INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:feet|foot|ft\.?|')\s*(\d{1,2})?").expect("valid regex")
});
static BARE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3}(?:\.\d+)?)").expect("valid regex"));

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text).and_then(|c| c[1].parse().ok())
}

impl HeightRule {
    /// Apply one rule to lowercased text.
    pub fn apply(self, text: &str) -> Option<f64> {
        match self {
            HeightRule::Centimeters => first_number(&CM, text),
            HeightRule::Meters => first_number(&METERS, text)
                .filter(|m| (1.3..=2.5).contains(m))
                .map(|m| m * 100.0),
            HeightRule::Inches => {
                // "5'10\"" carries an inches part that is not a full height
                if FOOT_TOKEN.is_match(text) {
                    return None;
                }
                first_number(&INCHES, text).map(|inches| inches * CM_PER_INCH)
            }
            HeightRule::FeetInches => FEET_INCHES.captures(text).and_then(|c| {
                let feet: f64 = c[1].parse().ok()?;
                let inches: f64 = match c.get(2) {
                    Some(m) => m.as_str().parse().ok()?,
                    None => 0.0,
                };
                Some((feet * 12.0 + inches) * CM_PER_INCH)
            }),
            HeightRule::BareNumber => {
                let value = first_number(&BARE_NUMBER, text)?;
                if (50.0..=90.0).contains(&value) {
                    Some(value * CM_PER_INCH)
                } else if (1.4..=2.5).contains(&value) {
                    Some(value * 100.0)
                } else if (140.0..=230.0).contains(&value) {
                    Some(value)
                } else {
                    None
                }
            }
        }
    }
}

/// Parse a height into centimeters, rounded to one decimal.
///
/// The result is not range-checked; see [`height_in_domain`].
pub fn parse_height_cm(text: &str) -> Option<f64> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    HEIGHT_RULES
        .iter()
        .find_map(|rule| rule.apply(&lower))
        .map(round1)
}

pub fn height_in_domain(cm: f64) -> bool {
    cm > 0.0 && cm <= MAX_HEIGHT_CM
}
