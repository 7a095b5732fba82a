//! Body weight text to kilograms.

use once_cell::sync::Lazy;
use regex::Regex;

use super::round1;

pub const KG_PER_POUND: f64 = 0.453_592_37;

/// Largest weight accepted as a real measurement.
pub const MAX_WEIGHT_KG: f64 = 500.0;

static KILOGRAMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*kg\b").expect("valid regex"));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("valid regex"));

fn numbers(re: &Regex, text: &str) -> Vec<f64> {
    re.captures_iter(text)
        .filter_map(|c| c[1].parse().ok())
        .collect()
}

/// Parse a weight into kilograms, rounded to one decimal.
///
/// Explicit kilogram values are averaged. Otherwise every number is read as
/// pounds and a range collapses to the midpoint of its extremes.
pub fn parse_weight_kg(text: &str) -> Option<f64> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    let kilograms = numbers(&KILOGRAMS, &lower);
    if !kilograms.is_empty() {
        let mean = kilograms.iter().sum::<f64>() / kilograms.len() as f64;
        return Some(round1(mean));
    }

    let pounds = numbers(&NUMBER, &lower);
    let value = match pounds.as_slice() {
        [] => return None,
        [single] => *single,
        many => {
            let min = many.iter().copied().fold(f64::INFINITY, f64::min);
            let max = many.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (min + max) / 2.0
        }
    };
    Some(round1(value * KG_PER_POUND))
}

pub fn weight_in_domain(kg: f64) -> bool {
    kg > 0.0 && kg <= MAX_WEIGHT_KG
}
