//! Scalar parsers: one free-text field in, one typed value (or absence) out.
//!
//! Every parser is pure and total. Unparseable text is `None`, never a
//! sentinel value.

pub mod date;
pub mod height;
pub mod text;
pub mod weight;

pub use date::{compute_age, parse_date, DateRule, DATE_RULES};
pub use height::{height_in_domain, parse_height_cm, HeightRule, HEIGHT_RULES};
pub use text::{count_aliases, first_hair_color, split_languages, LANGUAGE_SLOTS};
pub use weight::{parse_weight_kg, weight_in_domain};

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
