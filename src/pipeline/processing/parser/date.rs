//! Birth dates, ages and the two-digit year pivot.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Two-digit years above this are 19xx, the rest 20xx.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 25;

/// Candidate date rules, tried in this order. The first rule that yields a
/// valid calendar date wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// A chrono layout that must match the whole text.
    Layout(&'static str),
    /// `M/D/YYYY` or `M/D/YY` as the whole text.
    WholeSlashed,
    /// First `YYYY-MM-DD` inside longer text.
    IsoSearch,
    /// First `M/D/YY` or `M/D/YYYY` inside longer text.
    SlashedSearch,
    /// First `Month D, YYYY` or `D Month YYYY` inside longer text.
    MonthNameSearch,
}

pub const DATE_RULES: [DateRule; 9] = [
    DateRule::Layout("%B %d, %Y"),
    DateRule::Layout("%b %d, %Y"),
    DateRule::WholeSlashed,
    DateRule::Layout("%Y-%m-%d"),
    DateRule::Layout("%d %B %Y"),
    DateRule::Layout("%d %b %Y"),
    DateRule::IsoSearch,
    DateRule::SlashedSearch,
    DateRule::MonthNameSearch,
];

static WHOLE_SLASHED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})$").expect("valid regex"));
static ISO_SEARCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("valid regex"));
static SLASHED_SEARCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})\b").expect("valid regex"));

const MONTH_NAME: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

static MONTH_FIRST_SEARCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b{}\.?\s+(\d{{1,2}}),?\s+(\d{{4}})\b", MONTH_NAME)).expect("valid regex")
});
static DAY_FIRST_SEARCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(\d{{1,2}})\s+{}\.?,?\s+(\d{{4}})\b", MONTH_NAME)).expect("valid regex")
});

impl DateRule {
    pub fn apply(self, text: &str) -> Option<NaiveDate> {
        match self {
            DateRule::Layout(layout) => NaiveDate::parse_from_str(text, layout)
                .ok()
                .filter(|d| (1000..=9999).contains(&d.year())),
            DateRule::WholeSlashed => WHOLE_SLASHED.captures(text).and_then(|c| {
                build_date(&c[3], &c[1], &c[2])
            }),
            DateRule::IsoSearch => ISO_SEARCH
                .captures_iter(text)
                .find_map(|c| build_date(&c[1], &c[2], &c[3])),
            DateRule::SlashedSearch => SLASHED_SEARCH
                .captures_iter(text)
                .find_map(|c| build_date(&c[3], &c[1], &c[2])),
            DateRule::MonthNameSearch => {
                let month_first = MONTH_FIRST_SEARCH.captures_iter(text).find_map(|c| {
                    let start = c.get(0)?.start();
                    let month = month_number(&c[1])?;
                    Some((start, ymd(&c[3], month, &c[2])?))
                });
                let day_first = DAY_FIRST_SEARCH.captures_iter(text).find_map(|c| {
                    let start = c.get(0)?.start();
                    let month = month_number(&c[2])?;
                    Some((start, ymd(&c[3], month, &c[1])?))
                });
                // Earliest in reading order
                match (month_first, day_first) {
                    (Some(a), Some(b)) => Some(if a.0 <= b.0 { a.1 } else { b.1 }),
                    (a, b) => a.or(b).map(|(_, d)| d),
                }
            }
        }
    }
}

/// Parse the first recognizable date in free text.
///
/// Only one date is returned; when a page lists several
/// (`"April 13, 1961 (exact) or 1960 (approximate)"`) the first one wins.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DATE_RULES.iter().find_map(|rule| rule.apply(text))
}

/// Expand a two-digit year around the pivot; longer years pass through.
pub fn expand_year(digits: &str) -> Option<i32> {
    let year: i32 = digits.parse().ok()?;
    if digits.len() == 2 {
        Some(if year > TWO_DIGIT_YEAR_PIVOT { 1900 + year } else { 2000 + year })
    } else {
        Some(year)
    }
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    ymd(year, month.parse().ok()?, day)
}

fn ymd(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(expand_year(year)?, month, day.parse().ok()?)
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    let month = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Whole years between `birth` and `reference`. Negative ages are absence.
pub fn compute_age(birth: NaiveDate, reference: NaiveDate) -> Option<u32> {
    let mut years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_whole_string_layouts() {
        assert_eq!(parse_date("April 13, 1961"), Some(d(1961, 4, 13)));
        assert_eq!(parse_date("Apr 13, 1961"), Some(d(1961, 4, 13)));
        assert_eq!(parse_date("04/13/1961"), Some(d(1961, 4, 13)));
        assert_eq!(parse_date("1961-04-13"), Some(d(1961, 4, 13)));
        assert_eq!(parse_date("13 April 1961"), Some(d(1961, 4, 13)));
        assert_eq!(parse_date("13 Apr 1961"), Some(d(1961, 4, 13)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_date("04/13/61"), Some(d(1961, 4, 13)));
        assert_eq!(parse_date("04/13/05"), Some(d(2005, 4, 13)));
        assert_eq!(parse_date("01/01/25"), Some(d(2025, 1, 1)));
        assert_eq!(parse_date("01/01/26"), Some(d(1926, 1, 1)));
    }

    #[test]
    fn test_first_date_wins_in_multi_date_text() {
        assert_eq!(
            parse_date("April 13, 1961 (exact) or 1960 (approximate)"),
            Some(d(1961, 4, 13))
        );
        assert_eq!(
            parse_date("December 2, 1975, December 2, 1976"),
            Some(d(1975, 12, 2))
        );
        assert_eq!(parse_date("Used: 3 March 1980; 4 May 1981"), Some(d(1980, 3, 3)));
    }

    #[test]
    fn test_substring_fallbacks() {
        assert_eq!(parse_date("born 1970-06-01 in Ohio"), Some(d(1970, 6, 1)));
        assert_eq!(parse_date("approx. 6/1/70 per records"), Some(d(1970, 6, 1)));
        assert_eq!(parse_date("Sept. 9, 1988"), Some(d(1988, 9, 9)));
    }

    #[test]
    fn test_rule_priority_is_iso_before_slashed() {
        assert_eq!(parse_date("06/01/1970 or 1971-02-03"), Some(d(1971, 2, 3)));
    }

    #[test]
    fn test_impossible_or_missing_dates_are_absent() {
        assert_eq!(parse_date("02/30/1990"), None);
        assert_eq!(parse_date("1960 (approximate)"), None);
        assert_eq!(parse_date("unknown"), None);
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn test_compute_age() {
        let reference = d(2025, 10, 21);
        assert_eq!(compute_age(d(1961, 4, 13), reference), Some(64));
        assert_eq!(compute_age(d(1961, 10, 21), reference), Some(64));
        assert_eq!(compute_age(d(1961, 10, 22), reference), Some(63));
        assert_eq!(compute_age(d(2030, 1, 1), reference), None);
    }
}
