//! Versioned salary table rows and bonus entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, CategoryAmounts, MonthWindow};

/// One version of the basic-salary table, effective from `effective_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicSalaryRow {
    /// The date from which these basics apply.
    pub effective_date: NaiveDate,
    /// Basic salary per category.
    pub amounts: CategoryAmounts,
}

impl BasicSalaryRow {
    /// Returns the basic salary for a category.
    pub fn basic(&self, category: Category) -> Decimal {
        self.amounts.get(category)
    }
}

/// A basic-salary row together with its derived validity window.
///
/// Both ends of the window are inclusive calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSalaryInterval {
    /// The underlying table row.
    pub row: BasicSalaryRow,
    /// First day the row applies.
    pub valid_from: NaiveDate,
    /// Last day the row applies.
    pub valid_to: NaiveDate,
}

impl ResolvedSalaryInterval {
    /// The all-zero row used when no table row covers a month.
    ///
    /// A month resolved to this row is a data-completeness signal, not a
    /// fault.
    pub fn zero_for(month: &MonthWindow) -> Self {
        Self {
            row: BasicSalaryRow {
                effective_date: month.from,
                amounts: CategoryAmounts::zero(),
            },
            valid_from: month.from,
            valid_to: month.to,
        }
    }

    /// Returns true when this interval overlaps the month window.
    pub fn overlaps(&self, month: &MonthWindow) -> bool {
        month.overlaps(self.valid_from, self.valid_to)
    }

    /// The category-indexed basics of this interval.
    pub fn amounts(&self) -> &CategoryAmounts {
        &self.row.amounts
    }
}

/// An additional recurring payment with its own validity range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEntry {
    /// First day the entry applies.
    pub valid_from: NaiveDate,
    /// Last day the entry applies.
    pub valid_to: NaiveDate,
    /// Free-text concept label.
    pub label: String,
    /// Whether the payment counts towards the deduction base.
    pub is_remunerative: bool,
    /// Amount paid per category.
    pub amounts: CategoryAmounts,
}

impl BonusEntry {
    /// Returns true when this entry overlaps the month window.
    pub fn overlaps(&self, month: &MonthWindow) -> bool {
        month.overlaps(self.valid_from, self.valid_to)
    }

    /// The amount this entry pays for a category.
    pub fn amount_for(&self, category: Category) -> Decimal {
        self.amounts.get(category)
    }
}
