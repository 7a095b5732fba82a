use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_COLUMN_ORDER;
use crate::defaults::{BIRTH_PLACES, OCCUPATION_KEYWORDS};
use crate::error::{NormalizerError, Result};
use crate::pipeline::processing::classify::{BirthplaceTable, OccupationTable};
use crate::types::CountryCode;

/// One occupation category and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationRule {
    pub category: String,
    pub keywords: Vec<String>,
}

/// Country resolved for a place of birth. Both halves may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthplaceEntry {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
}

/// Injectable data for a normalization run.
///
/// Every field falls back to the built-in value, so a TOML file only needs
/// to name the tables it replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Date ages are computed against.
    pub reference_date: NaiveDate,
    /// Ordered occupation table. Order decides ties.
    pub occupations: Vec<OccupationRule>,
    /// Exact place text -> country.
    pub birthplaces: BTreeMap<String, BirthplaceEntry>,
    /// Final thematic column order.
    pub column_order: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            occupations: default_occupations(),
            birthplaces: default_birthplaces(),
            column_order: DEFAULT_COLUMN_ORDER.iter().map(|c| c.to_string()).collect(),
        }
    }
}

fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 21).unwrap_or_default()
}

fn default_occupations() -> Vec<OccupationRule> {
    OCCUPATION_KEYWORDS
        .iter()
        .map(|(category, keywords)| OccupationRule {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

fn default_birthplaces() -> BTreeMap<String, BirthplaceEntry> {
    BIRTH_PLACES
        .iter()
        .map(|(place, resolved)| {
            let entry = match resolved {
                Some((country, iso3)) => BirthplaceEntry {
                    country: Some(country.to_string()),
                    iso3: Some(iso3.to_string()),
                },
                None => BirthplaceEntry::default(),
            };
            (place.to_string(), entry)
        })
        .collect()
}

impl NormalizerConfig {
    /// Read and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            NormalizerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NormalizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn with_occupations(mut self, occupations: Vec<OccupationRule>) -> Self {
        self.occupations = occupations;
        self
    }

    pub fn with_birthplaces(mut self, birthplaces: BTreeMap<String, BirthplaceEntry>) -> Self {
        self.birthplaces = birthplaces;
        self
    }

    pub fn with_column_order(mut self, column_order: Vec<String>) -> Self {
        self.column_order = column_order;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for rule in &self.occupations {
            if rule.category.trim().is_empty() {
                return Err(NormalizerError::Config(
                    "occupation category names must not be empty".to_string(),
                ));
            }
            if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(NormalizerError::Config(format!(
                    "occupation category '{}' has no keywords",
                    rule.category
                )));
            }
        }

        for (place, entry) in &self.birthplaces {
            if let Some(code) = &entry.iso3 {
                if CountryCode::parse(code).is_none() {
                    return Err(NormalizerError::Config(format!(
                        "birthplace '{}' has invalid ISO alpha-3 code '{}'",
                        place, code
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for column in &self.column_order {
            if !seen.insert(column.as_str()) {
                return Err(NormalizerError::Config(format!(
                    "column '{}' appears more than once in column_order",
                    column
                )));
            }
        }

        Ok(())
    }

    pub fn occupation_table(&self) -> OccupationTable {
        OccupationTable::new(&self.occupations)
    }

    pub fn birthplace_table(&self) -> BirthplaceTable {
        BirthplaceTable::new(&self.birthplaces)
    }
}
