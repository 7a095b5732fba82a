use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::config::NormalizerConfig;
use crate::constants::{HAS_CAUTION, HAS_MARK, OCCUPATION_CATEGORY};
use crate::error::{NormalizerError, Result};
use crate::metrics::NormalizeMetrics;
use crate::pipeline::processing::classify::{BirthplaceTable, OccupationTable};
use crate::pipeline::processing::finalize::SchemaFinalizer;
use crate::pipeline::processing::normalize::{
    Derivation, FieldError, FieldTransform, TransformContext, TransformRegistry,
};
use crate::types::{CellValue, RawRecord, RecordSet};

/// Number of occupation categories listed in a run report.
pub const TOP_OCCUPATIONS: usize = 5;

/// Outcome of one registry stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageReport {
    pub stage: String,
    /// Non-absent values per output column after the stage ran.
    pub produced: Vec<(String, usize)>,
    pub faults: usize,
    pub skipped: bool,
}

/// Post-run sanity report. Never used for control flow.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub records_in: usize,
    pub records_out: usize,
    pub columns: Vec<String>,
    pub stages: Vec<StageReport>,
    pub total_faults: usize,
    pub top_occupations: Vec<(String, usize)>,
    pub records_with_marks: usize,
    pub records_with_caution: usize,
    /// SHA-256 of the JSON-serialized record set.
    pub digest: String,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.stage == name)
    }
}

/// Normalized records plus the report describing how they were produced.
#[derive(Debug, Clone)]
pub struct NormalizationRun {
    pub records: RecordSet,
    pub report: RunReport,
}

/// Applies the transform registry column by column, then finalizes the schema.
pub struct PipelineOrchestrator {
    config: NormalizerConfig,
    registry: TransformRegistry,
    occupations: OccupationTable,
    birthplaces: BirthplaceTable,
    finalizer: SchemaFinalizer,
}

impl PipelineOrchestrator {
    /// Orchestrator with the built-in tables and registry
    pub fn new() -> Self {
        Self::build(NormalizerConfig::default(), TransformRegistry::new())
    }

    pub fn with_config(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, TransformRegistry::new()))
    }

    pub fn with_registry(self, registry: TransformRegistry) -> Self {
        Self::build(self.config, registry)
    }

    fn build(config: NormalizerConfig, registry: TransformRegistry) -> Self {
        let occupations = config.occupation_table();
        let birthplaces = config.birthplace_table();
        let finalizer = SchemaFinalizer::new(&registry, &config.column_order);
        Self {
            config,
            registry,
            occupations,
            birthplaces,
            finalizer,
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    /// Final column order produced for a run in which every registry output
    /// exists and no extra labels are present.
    pub fn output_columns(&self) -> Vec<String> {
        let mut table = RecordSet::from_raw(&[]);
        for column in self.registry.output_columns() {
            table.ensure_column(column);
        }
        for (from, _) in self.registry.renames() {
            table.ensure_column(from);
        }
        self.finalizer.finalize(&mut table);
        table.columns().to_vec()
    }

    /// Flatten raw records and normalize them.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn normalize(&self, records: &[RawRecord]) -> Result<NormalizationRun> {
        if records.is_empty() {
            return Err(NormalizerError::EmptyRecordSet);
        }
        info!("🚀 Normalizing {} raw records", records.len());
        self.normalize_table(RecordSet::from_raw(records))
    }

    /// Normalize an already-flattened table, e.g. the output of an earlier run.
    #[instrument(skip_all, fields(records = table.len()))]
    pub fn normalize_table(&self, mut table: RecordSet) -> Result<NormalizationRun> {
        if table.is_empty() {
            return Err(NormalizerError::EmptyRecordSet);
        }
        let started = Instant::now();
        let records_in = table.len();

        let ctx = TransformContext {
            reference_date: self.config.reference_date,
            occupations: &self.occupations,
            birthplaces: &self.birthplaces,
        };

        let mut stages = Vec::new();
        for (entry, derivation) in self.registry.stages() {
            stages.push(self.run_stage(&mut table, entry, derivation, &ctx));
        }

        self.finalizer.finalize(&mut table);

        let digest = digest_records(&table)?;
        let total_faults = stages.iter().map(|s| s.faults).sum();
        let report = RunReport {
            records_in,
            records_out: table.len(),
            columns: table.columns().to_vec(),
            top_occupations: top_values(&table, OCCUPATION_CATEGORY, TOP_OCCUPATIONS),
            records_with_marks: count_true(&table, HAS_MARK),
            records_with_caution: count_true(&table, HAS_CAUTION),
            stages,
            total_faults,
            digest,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        NormalizeMetrics::record_run(report.records_out, started.elapsed().as_secs_f64());
        info!(
            "✅ Normalized {} records into {} columns ({} field faults)",
            report.records_out,
            report.columns.len(),
            report.total_faults
        );
        for (category, count) in &report.top_occupations {
            info!("    {}: {}", category, count);
        }

        Ok(NormalizationRun {
            records: table,
            report,
        })
    }

    fn run_stage(
        &self,
        table: &mut RecordSet,
        entry: &FieldTransform,
        derivation: &Derivation,
        ctx: &TransformContext<'_>,
    ) -> StageReport {
        let outputs = &derivation.outputs;
        let produced = |table: &RecordSet| {
            outputs
                .iter()
                .map(|o| (o.clone(), table.non_absent_count(o)))
                .collect::<Vec<_>>()
        };

        let has_source = entry.sources.iter().any(|s| table.has_column(s));
        if !has_source && outputs.iter().all(|o| table.has_column(o)) {
            debug!("⏭️  Stage '{}' skipped: outputs already derived", entry.name);
            NormalizeMetrics::record_stage_skipped();
            return StageReport {
                stage: entry.name.clone(),
                produced: produced(&*table),
                faults: 0,
                skipped: true,
            };
        }

        for output in outputs {
            table.ensure_column(output);
        }

        // Collect inputs first; writing outputs needs the table mutably
        let inputs: Vec<Option<String>> = (0..table.len())
            .map(|row| {
                entry.sources.iter().find_map(|source| {
                    table
                        .get(row, source)
                        .and_then(CellValue::as_text)
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                })
            })
            .collect();

        let mut faults = 0;
        for (row, input) in inputs.iter().enumerate() {
            // A panicking transform costs one cell, not the run
            let applied = panic::catch_unwind(AssertUnwindSafe(|| {
                derivation.transform.apply(&outputs[0], input.as_deref(), ctx)
            }))
            .unwrap_or_else(|_| {
                Err(FieldError::Custom(format!(
                    "transform '{}' panicked",
                    derivation.transform.name()
                )))
            });
            let result = applied.and_then(|values| {
                if values.len() == outputs.len() {
                    Ok(values)
                } else {
                    Err(FieldError::ArityMismatch {
                        expected: outputs.len(),
                        found: values.len(),
                    })
                }
            });

            match result {
                Ok(values) => {
                    for (output, value) in outputs.iter().zip(values) {
                        table.set(row, output, value);
                    }
                }
                Err(e) => {
                    faults += 1;
                    warn!(
                        stage = %entry.name,
                        row,
                        "Field fault, storing absence: {}",
                        e
                    );
                    for output in outputs {
                        table.set(row, output, None);
                    }
                }
            }
        }

        let produced = produced(&*table);
        for (column, count) in &produced {
            NormalizeMetrics::record_values_produced(column, *count);
            NormalizeMetrics::record_field_faults(column, faults);
        }
        info!(
            "📊 {}: {}{}",
            entry.name,
            produced
                .iter()
                .map(|(c, n)| format!("{}={}", c, n))
                .collect::<Vec<_>>()
                .join(", "),
            if faults > 0 { format!(" ({} faults)", faults) } else { String::new() }
        );

        StageReport {
            stage: entry.name.clone(),
            produced,
            faults,
            skipped: false,
        }
    }
}

impl Default for PipelineOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 hex digest of the JSON serialization of a record set.
pub fn digest_records(records: &RecordSet) -> Result<String> {
    let bytes = serde_json::to_vec(records)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

fn top_values(table: &RecordSet, column: &str, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in table.column_values(column).flatten() {
        if let Some(text) = value.as_text() {
            *counts.entry(text).or_default() += 1;
        }
    }
    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(limit);
    counts
}

fn count_true(table: &RecordSet, column: &str) -> usize {
    table
        .column_values(column)
        .filter(|v| v.and_then(CellValue::as_bool) == Some(true))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::pipeline::processing::normalize::{CustomTransform, Transform};
    use std::sync::Arc;

    fn sample() -> Vec<RawRecord> {
        vec![
            RawRecord::new("https://www.fbi.gov/wanted/cyber/alpha")
                .with_description("Height", "5'11\"")
                .with_description("Weight", "160 lbs")
                .with_description("Occupation", "Software engineer")
                .with_description("Scars and Marks", "Tattoo on left forearm"),
            RawRecord::new("https://www.fbi.gov/wanted/violent/bravo")
                .with_description("Height", "999 cm")
                .with_description("Eyes", "Brown"),
        ]
    }

    #[test]
    fn test_empty_input_is_a_run_level_error() {
        let orchestrator = PipelineOrchestrator::new();
        assert!(matches!(
            orchestrator.normalize(&[]),
            Err(NormalizerError::EmptyRecordSet)
        ));
    }

    #[test]
    fn test_field_fault_becomes_absence() {
        let run = PipelineOrchestrator::new().normalize(&sample()).unwrap();
        assert_eq!(run.records.get(0, HEIGHT_CM), Some(&CellValue::Float(180.3)));
        assert_eq!(run.records.get(1, HEIGHT_CM), None);

        let height = run.report.stage("height_cm").unwrap();
        assert_eq!(height.faults, 1);
        assert_eq!(height.produced, vec![(HEIGHT_CM.to_string(), 1)]);
        assert_eq!(run.report.total_faults, 1);
    }

    #[test]
    fn test_report_summaries() {
        let run = PipelineOrchestrator::new().normalize(&sample()).unwrap();
        assert_eq!(run.report.records_in, 2);
        assert_eq!(run.report.records_out, 2);
        assert_eq!(run.report.records_with_marks, 1);
        assert_eq!(run.report.records_with_caution, 0);
        assert_eq!(
            run.report.top_occupations,
            vec![("IT/Technology".to_string(), 1), ("Unknown".to_string(), 1)]
        );
        assert_eq!(run.report.digest.len(), 64);
    }

    #[test]
    fn test_output_columns_exist_without_sources() {
        let run = PipelineOrchestrator::new()
            .normalize(&[RawRecord::new("https://www.fbi.gov/wanted/cyber/x")])
            .unwrap();
        for column in [LANGUAGE_TERTIARY, BIRTH_COUNTRY_CODE, WEIGHT_KG, HAS_MARK] {
            assert!(run.records.has_column(column), "missing {}", column);
        }
        assert_eq!(run.records.get(0, ALIAS_COUNT), Some(&CellValue::Integer(0)));
        assert_eq!(run.records.get(0, HAS_MARK), Some(&CellValue::Bool(false)));
        assert_eq!(
            run.records.get(0, OCCUPATION_CATEGORY),
            Some(&CellValue::text("Unknown"))
        );
    }

    #[test]
    fn test_output_columns_match_configured_order() {
        let orchestrator = PipelineOrchestrator::new();
        assert_eq!(orchestrator.output_columns(), orchestrator.config().column_order);
    }

    #[derive(Debug)]
    struct Shout;

    impl CustomTransform for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        fn apply(
            &self,
            _column: &str,
            input: Option<&str>,
            _ctx: &TransformContext<'_>,
        ) -> std::result::Result<Vec<Option<CellValue>>, FieldError> {
            match input {
                Some("boom") => Err(FieldError::Custom("refused".to_string())),
                Some(text) => Ok(vec![Some(CellValue::text(text.to_uppercase()))]),
                None => Ok(vec![None, None]),
            }
        }
    }

    #[derive(Debug)]
    struct FirstThree;

    impl CustomTransform for FirstThree {
        fn name(&self) -> &str {
            "first_three"
        }

        fn apply(
            &self,
            _column: &str,
            input: Option<&str>,
            _ctx: &TransformContext<'_>,
        ) -> std::result::Result<Vec<Option<CellValue>>, FieldError> {
            // Slicing past the end panics on short input
            Ok(vec![input.map(|t| CellValue::text(&t[..3]))])
        }
    }

    #[test]
    fn test_panicking_transform_faults_one_cell() {
        let registry = TransformRegistry::new()
            .with(FieldTransform::derive(
                "first_three",
                &["Nickname"],
                &["nickname_prefix"],
                Transform::Custom(Arc::new(FirstThree)),
            ))
            .unwrap();
        let orchestrator = PipelineOrchestrator::new().with_registry(registry);

        let run = orchestrator
            .normalize(&[
                RawRecord::new("a")
                    .with_description("Nickname", "abcdef")
                    .with_description("Height", "180 cm"),
                RawRecord::new("b")
                    .with_description("Nickname", "x")
                    .with_description("Height", "170 cm"),
            ])
            .unwrap();

        assert_eq!(run.records.get(0, "nickname_prefix"), Some(&CellValue::text("abc")));
        assert_eq!(run.records.get(1, "nickname_prefix"), None);
        assert_eq!(run.report.stage("first_three").unwrap().faults, 1);
        assert_eq!(run.report.total_faults, 1);

        // Other stages and rows are untouched
        assert_eq!(run.records.get(1, HEIGHT_CM), Some(&CellValue::Float(170.0)));
        assert_eq!(run.records.get(1, ALIAS_COUNT), Some(&CellValue::Integer(0)));
        assert_eq!(run.report.records_out, 2);
    }

    #[test]
    fn test_custom_transform_is_one_registry_entry() {
        let registry = TransformRegistry::new()
            .with(FieldTransform::derive(
                "shout",
                &["Nickname"],
                &["nickname_upper"],
                Transform::Custom(Arc::new(Shout)),
            ))
            .unwrap();
        let orchestrator = PipelineOrchestrator::new().with_registry(registry);

        let run = orchestrator
            .normalize(&[
                RawRecord::new("a").with_description("Nickname", "ace"),
                RawRecord::new("b").with_description("Nickname", "boom"),
                RawRecord::new("c"),
            ])
            .unwrap();

        assert_eq!(run.records.get(0, "nickname_upper"), Some(&CellValue::text("ACE")));
        assert_eq!(run.records.get(1, "nickname_upper"), None);
        assert_eq!(run.records.get(2, "nickname_upper"), None);
        // one custom refusal plus one arity mismatch
        assert_eq!(run.report.stage("shout").unwrap().faults, 2);
        assert!(!run.records.has_column("Nickname"));
    }
}
