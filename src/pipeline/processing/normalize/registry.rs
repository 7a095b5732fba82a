use std::collections::{HashMap, HashSet};

use super::transform::Transform;
use crate::constants::*;
use crate::error::{NormalizerError, Result};

/// What happens to a source column once the pipeline has read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposal {
    Drop,
    Keep,
    RenameTo(String),
}

/// Output columns filled by one transform.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub outputs: Vec<String>,
    pub transform: Transform,
}

/// One registry entry: which source labels feed which transform, and the
/// fate of those labels in the final schema.
#[derive(Debug, Clone)]
pub struct FieldTransform {
    pub name: String,
    /// Candidate source columns; per record the first one holding text wins.
    pub sources: Vec<String>,
    pub derive: Option<Derivation>,
    pub disposal: Disposal,
}

impl FieldTransform {
    /// Derive `outputs` from `sources`; the sources are dropped afterwards.
    pub fn derive(name: &str, sources: &[&str], outputs: &[&str], transform: Transform) -> Self {
        Self {
            name: name.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
            derive: Some(Derivation {
                outputs: outputs.iter().map(|o| o.to_string()).collect(),
                transform,
            }),
            disposal: Disposal::Drop,
        }
    }

    /// Remove a column without deriving anything from it.
    pub fn drop(source: &str) -> Self {
        Self {
            name: format!("drop:{}", source),
            sources: vec![source.to_string()],
            derive: None,
            disposal: Disposal::Drop,
        }
    }

    pub fn rename(source: &str, target: &str) -> Self {
        Self {
            name: format!("rename:{}", source),
            sources: vec![source.to_string()],
            derive: None,
            disposal: Disposal::RenameTo(target.to_string()),
        }
    }

    pub fn with_disposal(mut self, disposal: Disposal) -> Self {
        self.disposal = disposal;
        self
    }

    pub fn keep_sources(self) -> Self {
        self.with_disposal(Disposal::Keep)
    }
}

/// Ordered table of field transforms. Stage order is registration order.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    entries: Vec<FieldTransform>,
}

impl TransformRegistry {
    /// Create a registry with the built-in wanted-record transforms
    pub fn new() -> Self {
        Self {
            entries: standard_entries(),
        }
    }

    /// Create a registry with no entries
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a transform after the existing ones.
    ///
    /// Rejects entries that would make the final schema ambiguous.
    pub fn register(&mut self, entry: FieldTransform) -> Result<()> {
        self.check(&entry)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn with(mut self, entry: FieldTransform) -> Result<Self> {
        self.register(entry)?;
        Ok(self)
    }

    fn check(&self, entry: &FieldTransform) -> Result<()> {
        let fail = |msg: String| -> Result<()> {
            Err(NormalizerError::Registry(format!("'{}': {}", entry.name, msg)))
        };

        if entry.sources.is_empty() {
            return fail("no source columns".to_string());
        }

        if let Some(derivation) = &entry.derive {
            if derivation.outputs.is_empty() {
                return fail("no output columns".to_string());
            }
            if let Some(arity) = derivation.transform.arity() {
                if arity != derivation.outputs.len() {
                    return fail(format!(
                        "transform '{}' fills {} columns but {} are declared",
                        derivation.transform.name(),
                        arity,
                        derivation.outputs.len()
                    ));
                }
            }
            let produced: HashSet<&str> = self.output_columns().into_iter().collect();
            for output in &derivation.outputs {
                if produced.contains(output.as_str()) {
                    return fail(format!("output column '{}' is already produced", output));
                }
            }
        }

        let renames = self.renames();
        let dropped = self.dropped_columns();
        for source in &entry.sources {
            match &entry.disposal {
                Disposal::RenameTo(target) => {
                    if let Some(existing) = renames.get(source.as_str()) {
                        if *existing != target.as_str() {
                            return fail(format!(
                                "'{}' is already renamed to '{}'",
                                source, existing
                            ));
                        }
                    }
                    if dropped.contains(source.as_str()) {
                        return fail(format!("'{}' is both dropped and renamed", source));
                    }
                    if renames
                        .iter()
                        .any(|(other, t)| *t == target.as_str() && *other != source.as_str())
                    {
                        return fail(format!("two columns are renamed to '{}'", target));
                    }
                }
                Disposal::Drop => {
                    if renames.contains_key(source.as_str()) {
                        return fail(format!("'{}' is both dropped and renamed", source));
                    }
                }
                Disposal::Keep => {}
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[FieldTransform] {
        &self.entries
    }

    /// Entries that derive new columns, in stage order.
    pub fn stages(&self) -> impl Iterator<Item = (&FieldTransform, &Derivation)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.derive.as_ref().map(|d| (entry, d)))
    }

    /// List all derived column names, in stage order
    pub fn output_columns(&self) -> Vec<&str> {
        self.stages()
            .flat_map(|(_, d)| d.outputs.iter().map(String::as_str))
            .collect()
    }

    /// Columns any entry marks for removal.
    pub fn dropped_columns(&self) -> HashSet<&str> {
        self.entries
            .iter()
            .filter(|e| e.disposal == Disposal::Drop)
            .flat_map(|e| e.sources.iter().map(String::as_str))
            .collect()
    }

    /// Source -> target renames.
    pub fn renames(&self) -> HashMap<&str, &str> {
        let mut renames = HashMap::new();
        for entry in &self.entries {
            if let Disposal::RenameTo(target) = &entry.disposal {
                for source in &entry.sources {
                    renames.insert(source.as_str(), target.as_str());
                }
            }
        }
        renames
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn standard_entries() -> Vec<FieldTransform> {
    let mut entries = vec![
        FieldTransform::derive("alias_count", &[ALIAS_TEXT], &[ALIAS_COUNT], Transform::AliasCount)
            .keep_sources(),
        FieldTransform::derive("date_of_birth", &DOB_LABELS, &[DATE_OF_BIRTH], Transform::BirthDate),
        FieldTransform::derive("age_years", &DOB_LABELS, &[AGE_YEARS], Transform::Age),
        FieldTransform::derive("zodiac_sign", &DOB_LABELS, &[ZODIAC_SIGN], Transform::Zodiac),
        FieldTransform::derive(
            "occupation_category",
            &[LABEL_OCCUPATION],
            &[OCCUPATION_CATEGORY],
            Transform::Occupation,
        ),
        FieldTransform::derive(
            "birth_country",
            &[LABEL_PLACE_OF_BIRTH],
            &[BIRTH_COUNTRY, BIRTH_COUNTRY_CODE],
            Transform::BirthCountry,
        ),
        FieldTransform::derive(
            "languages",
            &[LABEL_LANGUAGES],
            &[LANGUAGE_PRIMARY, LANGUAGE_SECONDARY, LANGUAGE_TERTIARY],
            Transform::Languages,
        ),
        FieldTransform::derive("hair_color", &[LABEL_HAIR], &[HAIR_COLOR], Transform::HairColor),
        FieldTransform::derive("height_cm", &[LABEL_HEIGHT], &[HEIGHT_CM], Transform::Height),
        FieldTransform::derive("weight_kg", &[LABEL_WEIGHT], &[WEIGHT_KG], Transform::Weight),
        FieldTransform::derive("has_mark", &[LABEL_SCARS_AND_MARKS], &[HAS_MARK], Transform::HasMark),
        FieldTransform::derive("has_caution", &[CAUTION_TEXT], &[HAS_CAUTION], Transform::HasCaution),
    ];

    for column in [
        IMAGE_URL,
        REMARKS,
        LABEL_RACE,
        LABEL_RACE_LOWER,
        LABEL_BUILD,
        LABEL_CITIZENSHIP,
        LABEL_COMPLEXION,
        LABEL_AGE,
    ] {
        entries.push(FieldTransform::drop(column));
    }

    for (source, target) in [
        (LABEL_EYES, EYE_COLOR),
        (LABEL_SEX, SEX),
        (LABEL_NATIONALITY, NATIONALITY),
        (LABEL_NCIC, NCIC_NUMBER),
    ] {
        entries.push(FieldTransform::rename(source, target));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_built_in_transforms() {
        let registry = TransformRegistry::new();
        let outputs = registry.output_columns();
        for column in [
            ALIAS_COUNT,
            DATE_OF_BIRTH,
            AGE_YEARS,
            ZODIAC_SIGN,
            OCCUPATION_CATEGORY,
            BIRTH_COUNTRY,
            BIRTH_COUNTRY_CODE,
            LANGUAGE_TERTIARY,
            HAIR_COLOR,
            HEIGHT_CM,
            WEIGHT_KG,
            HAS_MARK,
            HAS_CAUTION,
        ] {
            assert!(outputs.contains(&column), "missing {}", column);
        }
        assert_eq!(registry.stages().count(), 12);
    }

    #[test]
    fn test_standard_entries_pass_validation() {
        let mut registry = TransformRegistry::empty();
        for entry in standard_entries() {
            registry.register(entry).unwrap();
        }
        assert_eq!(registry.entries().len(), TransformRegistry::new().entries().len());
    }

    #[test]
    fn test_dispositions() {
        let registry = TransformRegistry::new();
        let dropped = registry.dropped_columns();
        assert!(dropped.contains(LABEL_HEIGHT));
        assert!(dropped.contains(LABEL_DOB_USED));
        assert!(dropped.contains(CAUTION_TEXT));
        assert!(dropped.contains(LABEL_AGE));
        assert!(!dropped.contains(ALIAS_TEXT));
        assert_eq!(registry.renames().get(LABEL_EYES), Some(&EYE_COLOR));
    }

    #[test]
    fn test_conflicting_renames_are_rejected() {
        let registry = TransformRegistry::new();
        let err = registry
            .clone()
            .with(FieldTransform::rename(LABEL_EYES, "eyes"))
            .unwrap_err();
        assert!(matches!(err, NormalizerError::Registry(_)));

        let err = registry
            .clone()
            .with(FieldTransform::rename("Eye Color", EYE_COLOR))
            .unwrap_err();
        assert!(matches!(err, NormalizerError::Registry(_)));

        assert!(registry.clone().with(FieldTransform::rename(LABEL_HEIGHT, "raw_height")).is_err());
    }

    #[test]
    fn test_arity_and_duplicate_outputs_are_rejected() {
        let registry = TransformRegistry::new();
        assert!(registry
            .clone()
            .with(FieldTransform::derive("langs", &["Tongues"], &["lang"], Transform::Languages))
            .is_err());
        assert!(registry
            .clone()
            .with(FieldTransform::derive("height2", &["Stature"], &[HEIGHT_CM], Transform::Height))
            .is_err());
        assert!(registry
            .with(FieldTransform::derive("height2", &["Stature"], &["stature_cm"], Transform::Height))
            .is_ok());
    }
}
