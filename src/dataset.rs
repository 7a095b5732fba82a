//! Reading raw records from disk and writing normalized record sets.
//!
//! These are collaborators of the CLI; the pipeline itself never touches
//! the filesystem.

use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{NormalizerError, Result};
use crate::metrics::DatasetMetrics;
use crate::types::{RawRecord, RecordSet};

/// JSON Schema every raw record input file must satisfy.
pub const RAW_RECORD_SCHEMA: &str = include_str!("../schemas/raw_record.v1.json");

/// Validation errors reported per rejected file.
const MAX_REPORTED_VIOLATIONS: usize = 5;

static RAW_RECORD_VALIDATOR: Lazy<JSONSchema> = Lazy::new(|| {
    let schema: Value = serde_json::from_str(RAW_RECORD_SCHEMA).expect("embedded schema is valid JSON");
    // jsonschema 0.17 needs a 'static schema; this one lives for the process
    let schema: &'static Value = Box::leak(Box::new(schema));
    JSONSchema::options()
        .compile(schema)
        .expect("embedded schema compiles")
});

/// Output encodings for a normalized record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Json,
        }
    }
}

/// Check a parsed document against the raw record schema.
pub fn validate_raw_records(document: &Value) -> Result<()> {
    if let Err(errors) = RAW_RECORD_VALIDATOR.validate(document) {
        let messages: Vec<String> = errors
            .take(MAX_REPORTED_VIOLATIONS)
            .map(|e| format!("{} at '{}'", e, e.instance_path))
            .collect();
        DatasetMetrics::record_schema_violation();
        return Err(NormalizerError::SchemaViolation(messages.join("; ")));
    }
    Ok(())
}

/// Parse and validate a JSON array of raw records.
pub fn parse_raw_records(json: &str) -> Result<Vec<RawRecord>> {
    let document: Value = serde_json::from_str(json)?;
    if !document.is_array() {
        return Err(NormalizerError::InvalidInput(
            "expected a JSON array of raw records".to_string(),
        ));
    }
    validate_raw_records(&document)?;
    Ok(serde_json::from_value(document)?)
}

pub fn load_raw_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records = parse_raw_records(&content).map_err(|e| {
        warn!("Rejected input {}: {}", path.display(), e);
        e
    })?;
    DatasetMetrics::record_loaded(records.len());
    info!("📥 Loaded {} raw records from {}", records.len(), path.display());
    Ok(records)
}

/// Encode a record set. Columns follow the schema order; absent cells are
/// `null` in JSON and empty in CSV.
pub fn render_records(records: &RecordSet, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(records)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(records.columns())?;
            for row in records.rows() {
                writer.write_record(records.columns().iter().map(|column| {
                    row.get(column).map(|v| v.to_string()).unwrap_or_default()
                }))?;
            }
            writer
                .into_inner()
                .map_err(|e| NormalizerError::Io(e.into_error()))
        }
    }
}

/// Write a record set to `path`, returning the number of bytes written.
pub fn write_records(path: impl AsRef<Path>, records: &RecordSet, format: OutputFormat) -> Result<usize> {
    let path = path.as_ref();
    let bytes = render_records(records, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &bytes)?;
    DatasetMetrics::record_written(format.as_str(), records.len(), bytes.len());
    info!(
        "💾 Wrote {} records ({} bytes, {}) to {}",
        records.len(),
        bytes.len(),
        format.as_str(),
        path.display()
    );
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_scraper_dump_shape() {
        let records = parse_raw_records(
            r#"[{"url": "https://www.fbi.gov/wanted/cyber/a", "name": "A", "description": {"Height": "6'0\""}}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description_text("Height"), Some("6'0\""));
    }

    #[test]
    fn test_parse_rejects_non_arrays() {
        let err = parse_raw_records(r#"{"url": "x"}"#).unwrap_err();
        assert!(matches!(err, NormalizerError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_schema_violations() {
        let err = parse_raw_records(r#"[{"name": "no url"}]"#).unwrap_err();
        assert!(matches!(err, NormalizerError::SchemaViolation(_)));

        let err = parse_raw_records(r#"[{"url": "u", "description": {"Height": ["6", "0"]}}]"#)
            .unwrap_err();
        assert!(matches!(err, NormalizerError::SchemaViolation(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out.CSV")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("out")), OutputFormat::Json);
    }

    #[test]
    fn test_csv_has_header_and_empty_absent_cells() {
        let set = RecordSet::from_raw(&[RawRecord::new("u1")]);
        let bytes = render_records(&set, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("source_url,category,name,alias_text,image_url,remarks,caution_text,field_office")
        );
        assert_eq!(lines.next(), Some("u1,,,,,,,"));
    }
}
