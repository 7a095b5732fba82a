use crate::config::OccupationRule;
use crate::constants::{OCCUPATION_OTHER, OCCUPATION_UNKNOWN};

/// Ordered keyword table for occupation categories.
///
/// Keywords are stored lowercased; matching is a case-insensitive substring
/// test and the first category with any hit wins.
#[derive(Debug, Clone, Default)]
pub struct OccupationTable {
    rules: Vec<(String, Vec<String>)>,
}

impl OccupationTable {
    pub fn new(rules: &[OccupationRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| {
                let keywords = rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (rule.category.clone(), keywords)
            })
            .collect();
        Self { rules }
    }

    /// Category names in table order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(category, _)| category.as_str())
    }

    /// `Unknown` for missing text, `Other` when nothing matches.
    pub fn classify(&self, text: Option<&str>) -> String {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return OCCUPATION_UNKNOWN.to_string();
        };
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|(category, _)| category.clone())
            .unwrap_or_else(|| OCCUPATION_OTHER.to_string())
    }

    /// Whether `label` is one this table can produce.
    pub fn is_known_label(&self, label: &str) -> bool {
        label == OCCUPATION_UNKNOWN || label == OCCUPATION_OTHER || self.categories().any(|c| c == label)
    }
}
