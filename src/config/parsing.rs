//! Conversion of raw table cells into typed values.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{AmountFormat, RawBasicSalaryRecord, RawBonusRecord};
use crate::error::{EngineError, EngineResult};
use crate::models::{BasicSalaryRow, BonusEntry, Category, CategoryAmounts};

/// Parses a monetary cell.
///
/// Surrounding whitespace and `$` signs are ignored and a blank cell is zero.
/// In [`AmountFormat::Plain`] commas are thousands separators; in
/// [`AmountFormat::Ars`] dots are thousands separators and the comma is the
/// decimal point.
///
/// # Examples
///
/// ```
/// use salary_engine::config::{AmountFormat, parse_amount};
/// use rust_decimal::Decimal;
///
/// let plain = parse_amount("1,054,358.50", AmountFormat::Plain).unwrap();
/// let ars = parse_amount("$1.054.358,50", AmountFormat::Ars).unwrap();
/// assert_eq!(plain, Decimal::new(105435850, 2));
/// assert_eq!(plain, ars);
/// ```
pub fn parse_amount(value: &str, format: AmountFormat) -> EngineResult<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let cleaned: String = match format {
        AmountFormat::Plain => trimmed.chars().filter(|c| *c != '$' && *c != ',').collect(),
        AmountFormat::Ars => trimmed
            .chars()
            .filter(|c| *c != '$' && *c != '.')
            .map(|c| if c == ',' { '.' } else { c })
            .collect(),
    };

    Decimal::from_str(cleaned.trim()).map_err(|_| EngineError::InvalidAmount {
        value: value.to_string(),
    })
}

/// Parses a date cell written day first (`d/m/yyyy`) or as ISO `yyyy-mm-dd`.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| EngineError::InvalidDate {
            value: value.to_string(),
        })
}

/// Parses the remunerative flag: `SI` or `NO`, case-insensitive.
pub fn parse_remunerative(value: &str) -> EngineResult<bool> {
    match value.trim().to_uppercase().as_str() {
        "SI" => Ok(true),
        "NO" => Ok(false),
        _ => Err(EngineError::InvalidField {
            field: "REMUNERATIVO".to_string(),
            message: format!("expected SI or NO, got '{}'", value),
        }),
    }
}

fn parse_category_amounts(cells: [&str; 7], format: AmountFormat) -> EngineResult<CategoryAmounts> {
    let mut amounts = [Decimal::ZERO; 7];
    for ((amount, cell), category) in amounts.iter_mut().zip(cells).zip(Category::ALL) {
        *amount = parse_amount(cell, format).map_err(|_| EngineError::InvalidField {
            field: category.column_name(),
            message: format!("invalid amount '{}'", cell),
        })?;
    }
    Ok(CategoryAmounts::new(amounts))
}

/// Converts a raw basic-salary record into a [`BasicSalaryRow`].
pub fn parse_basic_salary_record(
    record: &RawBasicSalaryRecord,
    format: AmountFormat,
) -> EngineResult<BasicSalaryRow> {
    Ok(BasicSalaryRow {
        effective_date: parse_date(&record.effective_date)?,
        amounts: parse_category_amounts(record.category_cells(), format)?,
    })
}

/// Converts a raw bonus record into a [`BonusEntry`].
///
/// A row whose `HASTA` date falls before its `DESDE` date is rejected.
pub fn parse_bonus_record(record: &RawBonusRecord, format: AmountFormat) -> EngineResult<BonusEntry> {
    let valid_from = parse_date(&record.valid_from)?;
    let valid_to = parse_date(&record.valid_to)?;
    if valid_to < valid_from {
        return Err(EngineError::InvalidField {
            field: "HASTA".to_string(),
            message: format!(
                "'{}' is before DESDE '{}'",
                record.valid_to.trim(),
                record.valid_from.trim()
            ),
        });
    }

    Ok(BonusEntry {
        valid_from,
        valid_to,
        label: record.label.trim().to_string(),
        is_remunerative: parse_remunerative(&record.remunerative)?,
        amounts: parse_category_amounts(record.category_cells(), format)?,
    })
}
