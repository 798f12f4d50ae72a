//! Month-to-table matching.
//!
//! Selects the basic-salary interval and the bonus entries that apply to a
//! calendar month.

use std::ops::Deref;

use tracing::warn;

use crate::models::{BonusEntry, MonthWindow, ResolvedSalaryInterval, SalarySource};

/// The outcome of looking up a month in the resolved salary timeline.
///
/// A month with no covering row is not an error: it resolves to an all-zero
/// row, kept as the explicit [`SalaryLookup::Missing`] case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalaryLookup<'a> {
    /// An interval of the table overlaps the month.
    Found(&'a ResolvedSalaryInterval),
    /// No interval overlaps the month; every basic is zero.
    Missing(ResolvedSalaryInterval),
}

impl SalaryLookup<'_> {
    /// The interval to compute the month with.
    pub fn interval(&self) -> &ResolvedSalaryInterval {
        match self {
            SalaryLookup::Found(interval) => interval,
            SalaryLookup::Missing(zero) => zero,
        }
    }

    /// Where the month's basics came from.
    pub fn source(&self) -> SalarySource {
        match self {
            SalaryLookup::Found(interval) => SalarySource::Table {
                effective_date: interval.row.effective_date,
            },
            SalaryLookup::Missing(_) => SalarySource::MissingInterval,
        }
    }
}

impl Deref for SalaryLookup<'_> {
    type Target = ResolvedSalaryInterval;

    fn deref(&self) -> &Self::Target {
        self.interval()
    }
}

/// Returns the first interval overlapping `month`, or the all-zero row.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{find_salary_for_month, SalaryLookup};
/// use salary_engine::models::MonthWindow;
///
/// let month = MonthWindow::new(2024, 1).unwrap();
/// let lookup = find_salary_for_month(&[], &month);
/// assert!(matches!(lookup, SalaryLookup::Missing(_)));
/// assert!(lookup.amounts().is_zero());
/// ```
pub fn find_salary_for_month<'a>(
    intervals: &'a [ResolvedSalaryInterval],
    month: &MonthWindow,
) -> SalaryLookup<'a> {
    match intervals
        .iter()
        .find(|i| i.valid_from <= i.valid_to && i.overlaps(month))
    {
        Some(interval) => SalaryLookup::Found(interval),
        None => {
            warn!(
                month = %month.from,
                "No basic salary row covers month, using zero basics"
            );
            SalaryLookup::Missing(ResolvedSalaryInterval::zero_for(month))
        }
    }
}

/// Returns every bonus entry overlapping `month`, in input order.
///
/// Entries ending before they start never match.
pub fn filter_bonuses_for_month<'a>(
    bonuses: &'a [BonusEntry],
    month: &MonthWindow,
) -> Vec<&'a BonusEntry> {
    bonuses
        .iter()
        .filter(|b| b.valid_from <= b.valid_to && b.overlaps(month))
        .collect()
}
