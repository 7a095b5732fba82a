use chrono::NaiveDate;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use crate::constants::{self, IDENTIFICATION_COLUMNS};
use crate::error::Result;

/// Free-text description table of one subject: label -> value, in page order.
pub type Description = serde_json::Map<String, serde_json::Value>;

/// One subject as extracted by acquisition. Immutable input to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "url")]
    pub source_url: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "alias")]
    pub alias_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default, alias = "caution")]
    pub caution_text: Option<String>,
    #[serde(default)]
    pub field_office: Option<String>,
    #[serde(default)]
    pub description: Description,
}

impl RawRecord {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Default::default()
        }
    }

    /// Add a description entry, keeping page order.
    pub fn with_description(mut self, label: &str, value: &str) -> Self {
        self.description
            .insert(label.to_string(), serde_json::Value::String(value.to_string()));
        self
    }

    /// Text value of a description label, if present as text.
    pub fn description_text(&self, label: &str) -> Option<&str> {
        self.description.get(label).and_then(|v| v.as_str())
    }

    /// Explicit category, or the path segment following `wanted` in the source URL.
    pub fn resolved_category(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .or_else(|| category_from_url(&self.source_url))
    }

    fn top_level_cells(&self) -> [(&'static str, Option<String>); 8] {
        [
            (constants::SOURCE_URL, Some(self.source_url.clone())),
            (constants::CATEGORY, self.resolved_category()),
            (constants::NAME, self.name.clone()),
            (constants::ALIAS_TEXT, self.alias_text.clone()),
            (constants::IMAGE_URL, self.image_url.clone()),
            (constants::REMARKS, self.remarks.clone()),
            (constants::CAUTION_TEXT, self.caution_text.clone()),
            (constants::FIELD_OFFICE, self.field_office.clone()),
        ]
    }
}

/// Extract the category segment from a profile URL such as
/// `https://www.fbi.gov/wanted/cyber/john-doe`.
pub fn category_from_url(url: &str) -> Option<String> {
    let mut parts = url.split('/');
    parts.find(|part| *part == "wanted")?;
    parts
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// A typed cell. Absence is the missing cell, never a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            CellValue::Bool(_) => ColumnType::Boolean,
            CellValue::Integer(_) => ColumnType::Integer,
            CellValue::Float(_) => ColumnType::Float,
            CellValue::Date(_) => ColumnType::Date,
            CellValue::Text(_) => ColumnType::Text,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole numbers
            CellValue::Float(x) => write!(f, "{:?}", x),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Dominant value type of a column, used for the post-run type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    Mixed,
    Empty,
}

/// One row of a record set: column name -> value. Absent cells are not stored.
pub type Row = HashMap<String, CellValue>;

/// Ordered rows sharing an ordered column schema.
///
/// Rows are never reordered, merged or dropped; only columns change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten raw records into a table: identification columns first, then
    /// description labels in first-seen order across all records.
    pub fn from_raw(records: &[RawRecord]) -> Self {
        let mut set = RecordSet::new();
        for column in IDENTIFICATION_COLUMNS {
            set.ensure_column(column);
        }

        for record in records {
            let mut row = Row::new();
            for (column, value) in record.top_level_cells() {
                if let Some(value) = value {
                    row.insert(column.to_string(), CellValue::Text(value));
                }
            }
            for (label, value) in &record.description {
                // Identification cells come from the record itself
                if IDENTIFICATION_COLUMNS.contains(&label.as_str()) {
                    warn!(
                        "Ignoring description label '{}' on {}: it shadows an identification column",
                        label, record.source_url
                    );
                    continue;
                }
                set.ensure_column(label);
                let text = match value {
                    serde_json::Value::Null => continue,
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                row.insert(label.clone(), CellValue::Text(text));
            }
            set.rows.push(row);
        }

        set
    }

    /// Build a record set from already-typed rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut set = RecordSet::new();
        for column in &columns {
            set.ensure_column(column);
        }
        for row in &rows {
            for column in row.keys() {
                if !set.has_column(column) {
                    set.columns.push(column.clone());
                }
            }
        }
        set.rows = rows;
        set
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Append a column to the schema if it is not there yet.
    pub fn ensure_column(&mut self, column: &str) {
        if !self.has_column(column) {
            self.columns.push(column.to_string());
        }
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Set or clear one cell. The column must already be part of the schema.
    pub fn set(&mut self, row: usize, column: &str, value: Option<CellValue>) {
        debug_assert!(self.has_column(column), "unknown column {column}");
        if let Some(r) = self.rows.get_mut(row) {
            match value {
                Some(v) => {
                    r.insert(column.to_string(), v);
                }
                None => {
                    r.remove(column);
                }
            }
        }
    }

    pub fn remove_column(&mut self, column: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c != column);
        for row in &mut self.rows {
            row.remove(column);
        }
        before != self.columns.len()
    }

    /// Rename a column in place, keeping its schema position.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if !self.has_column(from) || self.has_column(to) {
            return false;
        }
        for c in &mut self.columns {
            if c == from {
                *c = to.to_string();
            }
        }
        for row in &mut self.rows {
            if let Some(value) = row.remove(from) {
                row.insert(to.to_string(), value);
            }
        }
        true
    }

    /// Replace the schema order. `order` must be a permutation of the columns.
    pub(crate) fn set_column_order(&mut self, order: Vec<String>) {
        debug_assert_eq!(order.len(), self.columns.len());
        self.columns = order;
    }

    pub fn non_absent_count(&self, column: &str) -> usize {
        self.rows.iter().filter(|r| r.contains_key(column)).count()
    }

    /// Values of one column in row order.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = Option<&'a CellValue>> + 'a {
        self.rows.iter().map(move |r| r.get(column))
    }

    /// Dominant type of every column, in schema order.
    pub fn column_types(&self) -> Vec<(String, ColumnType)> {
        self.columns
            .iter()
            .map(|column| {
                let mut seen: Option<ColumnType> = None;
                for value in self.column_values(column).flatten() {
                    let t = value.column_type();
                    seen = match seen {
                        None => Some(t),
                        Some(prev) if prev == t => Some(prev),
                        Some(_) => Some(ColumnType::Mixed),
                    };
                }
                (column.clone(), seen.unwrap_or(ColumnType::Empty))
            })
            .collect()
    }

    /// Rows as ordered JSON objects; absent cells become `null`.
    pub fn to_json_rows(&self) -> Result<Vec<serde_json::Map<String, serde_json::Value>>> {
        self.rows
            .iter()
            .map(|row| {
                let mut object = serde_json::Map::new();
                for column in &self.columns {
                    let value = match row.get(column) {
                        Some(cell) => serde_json::to_value(cell)?,
                        None => serde_json::Value::Null,
                    };
                    object.insert(column.clone(), value);
                }
                Ok(object)
            })
            .collect()
    }

    /// Typed view of every row.
    pub fn to_normalized(&self) -> Result<Vec<NormalizedRecord>> {
        self.to_json_rows()?
            .into_iter()
            .map(|object| Ok(serde_json::from_value(serde_json::Value::Object(object))?))
            .collect()
    }
}

struct OrderedRow<'a> {
    columns: &'a [String],
    row: &'a Row,
}

impl Serialize for OrderedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            map.serialize_entry(column, &self.row.get(column))?;
        }
        map.end()
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&OrderedRow {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

/// Western astrological sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO 3166-1 alpha-3 country code, e.g. `USA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
            Some(Self(code.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        CountryCode::parse(&value).ok_or_else(|| format!("'{}' is not an ISO alpha-3 code", value))
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed view of one finalized row.
///
/// Columns without a dedicated field (unrecognised description labels)
/// land in `extra`, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub source_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias_text: Option<String>,
    pub alias_count: u32,
    #[serde(default)]
    pub ncic_number: Option<String>,
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub age_years: Option<u32>,
    #[serde(default)]
    pub zodiac_sign: Option<ZodiacSign>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub birth_country: Option<String>,
    #[serde(default)]
    pub birth_country_code: Option<CountryCode>,

    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    pub has_mark: bool,

    #[serde(default)]
    pub language_primary: Option<String>,
    #[serde(default)]
    pub language_secondary: Option<String>,
    #[serde(default)]
    pub language_tertiary: Option<String>,

    pub occupation_category: String,

    #[serde(default)]
    pub field_office: Option<String>,
    pub has_caution: bool,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_url() {
        assert_eq!(
            category_from_url("https://www.fbi.gov/wanted/cyber/john-doe"),
            Some("cyber".to_string())
        );
        assert_eq!(category_from_url("https://www.fbi.gov/about"), None);
        assert_eq!(category_from_url("https://www.fbi.gov/wanted/"), None);
    }

    #[test]
    fn test_explicit_category_wins_over_url() {
        let mut record = RawRecord::new("https://www.fbi.gov/wanted/cyber/jane-roe");
        assert_eq!(record.resolved_category().as_deref(), Some("cyber"));
        record.category = Some("counterintelligence".to_string());
        assert_eq!(record.resolved_category().as_deref(), Some("counterintelligence"));
    }

    #[test]
    fn test_flatten_orders_identification_then_labels() {
        let a = RawRecord::new("https://example.test/wanted/a/1")
            .with_description("Height", "5'10\"")
            .with_description("Sex", "Male");
        let b = RawRecord::new("https://example.test/wanted/a/2")
            .with_description("Eyes", "Brown")
            .with_description("Height", "6'0\"");

        let set = RecordSet::from_raw(&[a, b]);
        let columns: Vec<&str> = set.columns().iter().map(String::as_str).collect();
        assert_eq!(&columns[..8], &IDENTIFICATION_COLUMNS[..]);
        assert_eq!(&columns[8..], &["Height", "Sex", "Eyes"]);
        assert_eq!(set.len(), 2);
        assert!(set.get(0, "Eyes").is_none());
        assert_eq!(set.get(1, "Eyes"), Some(&CellValue::text("Brown")));
    }

    #[test]
    fn test_description_cannot_overwrite_identification() {
        let record = RawRecord::new("https://www.fbi.gov/wanted/cyber/real")
            .with_description("source_url", "https://example.test/forged")
            .with_description("name", "Someone Else")
            .with_description("Sex", "Male");
        let set = RecordSet::from_raw(&[record]);

        assert_eq!(
            set.get(0, "source_url"),
            Some(&CellValue::text("https://www.fbi.gov/wanted/cyber/real"))
        );
        assert_eq!(set.get(0, "name"), None);
        assert_eq!(set.columns().len(), IDENTIFICATION_COLUMNS.len() + 1);
    }

    #[test]
    fn test_null_description_value_is_absent() {
        let mut record = RawRecord::new("u");
        record
            .description
            .insert("Hair".to_string(), serde_json::Value::Null);
        let set = RecordSet::from_raw(&[record]);
        assert!(set.has_column("Hair"));
        assert_eq!(set.non_absent_count("Hair"), 0);
    }

    #[test]
    fn test_rename_keeps_position_and_refuses_collisions() {
        let set = RecordSet::from_raw(&[RawRecord::new("u").with_description("Sex", "Female")]);
        let mut set = set;
        assert!(set.rename_column("Sex", "sex"));
        assert_eq!(set.columns().last().map(String::as_str), Some("sex"));
        assert_eq!(set.get(0, "sex"), Some(&CellValue::text("Female")));
        assert!(!set.rename_column("name", "sex"));
    }

    #[test]
    fn test_serialize_uses_schema_order_and_nulls() {
        let set = RecordSet::from_raw(&[RawRecord::new("u1")]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with("[{\"source_url\":\"u1\",\"category\":null"));
    }

    #[test]
    fn test_column_types() {
        let mut set = RecordSet::from_raw(&[RawRecord::new("a"), RawRecord::new("b")]);
        set.ensure_column("height_cm");
        set.set(0, "height_cm", Some(CellValue::Float(180.0)));
        set.ensure_column("mixed");
        set.set(0, "mixed", Some(CellValue::Integer(1)));
        set.set(1, "mixed", Some(CellValue::text("x")));

        let types: HashMap<String, ColumnType> = set.column_types().into_iter().collect();
        assert_eq!(types["height_cm"], ColumnType::Float);
        assert_eq!(types["mixed"], ColumnType::Mixed);
        assert_eq!(types["remarks"], ColumnType::Empty);
        assert_eq!(types["source_url"], ColumnType::Text);
    }

    #[test]
    fn test_from_rows_keeps_typed_cells() {
        let mut row = Row::new();
        row.insert("height_cm".to_string(), CellValue::Float(180.3));
        row.insert("age_years".to_string(), CellValue::Integer(64));
        row.insert("has_mark".to_string(), CellValue::Bool(true));
        let set = RecordSet::from_rows(vec!["height_cm".to_string()], vec![row, Row::new()]);

        assert_eq!(set.columns()[0], "height_cm");
        assert_eq!(set.columns().len(), 3);
        assert_eq!(set.get(0, "height_cm").and_then(CellValue::as_float), Some(180.3));
        assert_eq!(set.get(0, "age_years").and_then(CellValue::as_integer), Some(64));
        assert_eq!(set.get(0, "has_mark").and_then(CellValue::as_text), None);
        assert_eq!(set.get(1, "height_cm"), None);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Float(180.0).to_string(), "180.0");
        assert_eq!(CellValue::Float(72.6).to_string(), "72.6");
        let d = NaiveDate::from_ymd_opt(1961, 4, 13).unwrap();
        assert_eq!(CellValue::Date(d).to_string(), "1961-04-13");
        assert_eq!(CellValue::Date(d).as_date(), Some(d));
    }

    #[test]
    fn test_country_code_validation() {
        assert!(CountryCode::parse("USA").is_some());
        assert!(CountryCode::parse("usa").is_none());
        assert!(CountryCode::parse("US").is_none());
    }

    #[test]
    fn test_raw_record_accepts_scraper_field_names() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"url": "https://www.fbi.gov/wanted/cyber/x", "alias": "X", "caution": "$10,000", "description": {"Sex": "Male"}}"#,
        )
        .unwrap();
        assert_eq!(raw.source_url, "https://www.fbi.gov/wanted/cyber/x");
        assert_eq!(raw.alias_text.as_deref(), Some("X"));
        assert_eq!(raw.caution_text.as_deref(), Some("$10,000"));
        assert_eq!(raw.description_text("Sex"), Some("Male"));
    }
}
