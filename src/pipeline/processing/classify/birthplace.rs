use std::collections::{BTreeMap, HashMap};

use crate::config::BirthplaceEntry;
use crate::types::CountryCode;

/// Country name and ISO code resolved for one place of birth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthCountry {
    pub country: Option<String>,
    pub code: Option<CountryCode>,
}

/// Exact-match lookup from place text to country.
#[derive(Debug, Clone, Default)]
pub struct BirthplaceTable {
    places: HashMap<String, BirthCountry>,
}

impl BirthplaceTable {
    pub fn new(entries: &BTreeMap<String, BirthplaceEntry>) -> Self {
        let places = entries
            .iter()
            .map(|(place, entry)| {
                let resolved = BirthCountry {
                    country: entry.country.clone(),
                    code: entry.iso3.as_deref().and_then(CountryCode::parse),
                };
                (place.trim().to_string(), resolved)
            })
            .collect();
        Self { places }
    }

    /// Resolve a place of birth.
    ///
    /// Only surrounding whitespace is ignored. A place missing from the table
    /// keeps its own text as the country name and gets no code.
    pub fn classify(&self, place: Option<&str>) -> BirthCountry {
        let Some(place) = place.map(str::trim).filter(|p| !p.is_empty()) else {
            return BirthCountry {
                country: None,
                code: None,
            };
        };
        self.places.get(place).cloned().unwrap_or_else(|| BirthCountry {
            country: Some(place.to_string()),
            code: None,
        })
    }
}
