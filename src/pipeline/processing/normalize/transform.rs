use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::pipeline::processing::classify::{
    detect_currency_amount, detect_marks, zodiac_sign, BirthplaceTable, OccupationTable,
};
use crate::pipeline::processing::parser::{
    compute_age, count_aliases, first_hair_color, height_in_domain, parse_date, parse_height_cm,
    parse_weight_kg, split_languages, weight_in_domain, LANGUAGE_SLOTS,
};
use crate::types::CellValue;

/// A fault confined to one (record, column) cell.
///
/// The orchestrator logs and counts these, then stores absence for the cell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("value {value} for '{column}' is outside its domain")]
    OutOfDomain { column: String, value: String },

    #[error("transform returned {found} values, expected {expected}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("{0}")]
    Custom(String),
}

/// Read-only data a transform may consult.
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    pub reference_date: NaiveDate,
    pub occupations: &'a OccupationTable,
    pub birthplaces: &'a BirthplaceTable,
}

/// A caller-supplied transform, registered like a built-in one.
pub trait CustomTransform: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Number of output columns, when fixed.
    fn arity(&self) -> Option<usize> {
        None
    }

    fn apply(
        &self,
        column: &str,
        input: Option<&str>,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<Option<CellValue>>, FieldError>;
}

/// The parser or classifier behind one derived column group.
#[derive(Debug, Clone)]
pub enum Transform {
    BirthDate,
    Age,
    Zodiac,
    Height,
    Weight,
    HairColor,
    Languages,
    Occupation,
    BirthCountry,
    AliasCount,
    HasMark,
    HasCaution,
    Custom(Arc<dyn CustomTransform>),
}

impl Transform {
    pub fn name(&self) -> &str {
        match self {
            Transform::BirthDate => "birth_date",
            Transform::Age => "age",
            Transform::Zodiac => "zodiac",
            Transform::Height => "height",
            Transform::Weight => "weight",
            Transform::HairColor => "hair_color",
            Transform::Languages => "languages",
            Transform::Occupation => "occupation",
            Transform::BirthCountry => "birth_country",
            Transform::AliasCount => "alias_count",
            Transform::HasMark => "has_mark",
            Transform::HasCaution => "has_caution",
            Transform::Custom(custom) => custom.name(),
        }
    }

    /// How many output columns the transform fills, when known up front.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Transform::Languages => Some(LANGUAGE_SLOTS),
            Transform::BirthCountry => Some(2),
            Transform::Custom(custom) => custom.arity(),
            _ => Some(1),
        }
    }

    /// Run the transform on one cell's input text.
    ///
    /// `input` is `None` when no source column held text for this record.
    /// `column` names the first output and is only used in errors.
    pub fn apply(
        &self,
        column: &str,
        input: Option<&str>,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<Option<CellValue>>, FieldError> {
        let single = |value: Option<CellValue>| -> Result<Vec<Option<CellValue>>, FieldError> {
            Ok(vec![value])
        };

        match self {
            Transform::BirthDate => single(input.and_then(parse_date).map(CellValue::Date)),
            Transform::Age => single(
                input
                    .and_then(parse_date)
                    .and_then(|birth| compute_age(birth, ctx.reference_date))
                    .map(|age| CellValue::Integer(i64::from(age))),
            ),
            Transform::Zodiac => single(
                input
                    .and_then(parse_date)
                    .map(|birth| CellValue::text(zodiac_sign(birth).as_str())),
            ),
            Transform::Height => match input.and_then(parse_height_cm) {
                Some(cm) if !height_in_domain(cm) => Err(FieldError::OutOfDomain {
                    column: column.to_string(),
                    value: cm.to_string(),
                }),
                cm => single(cm.map(CellValue::Float)),
            },
            Transform::Weight => match input.and_then(parse_weight_kg) {
                Some(kg) if !weight_in_domain(kg) => Err(FieldError::OutOfDomain {
                    column: column.to_string(),
                    value: kg.to_string(),
                }),
                kg => single(kg.map(CellValue::Float)),
            },
            Transform::HairColor => single(input.and_then(first_hair_color).map(CellValue::Text)),
            Transform::Languages => {
                let slots = match input {
                    Some(text) => split_languages(text),
                    None => Default::default(),
                };
                Ok(slots.into_iter().map(|slot| slot.map(CellValue::Text)).collect())
            }
            Transform::Occupation => single(Some(CellValue::Text(ctx.occupations.classify(input)))),
            Transform::BirthCountry => {
                let resolved = ctx.birthplaces.classify(input);
                Ok(vec![
                    resolved.country.map(CellValue::Text),
                    resolved.code.map(|code| CellValue::Text(code.into())),
                ])
            }
            Transform::AliasCount => single(Some(CellValue::Integer(i64::from(count_aliases(input))))),
            Transform::HasMark => single(Some(CellValue::Bool(detect_marks(input)))),
            Transform::HasCaution => single(Some(CellValue::Bool(detect_currency_amount(input)))),
            Transform::Custom(custom) => custom.apply(column, input, ctx),
        }
    }
}
