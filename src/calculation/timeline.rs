//! Timeline resolution for the basic-salary table.
//!
//! Turns an unordered list of dated basic-salary rows into contiguous,
//! non-overlapping validity intervals.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{BasicSalaryRow, ResolvedSalaryInterval};

fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Resolves the validity window of every basic-salary row.
///
/// The most recent row is valid until December 31 of its year. Every older
/// row is valid until the day before the next more recent row takes effect.
/// The result is sorted by effective date, oldest first.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::resolve_timeline;
/// use salary_engine::models::{BasicSalaryRow, CategoryAmounts};
/// use chrono::NaiveDate;
///
/// let rows = vec![
///     BasicSalaryRow {
///         effective_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///         amounts: CategoryAmounts::zero(),
///     },
///     BasicSalaryRow {
///         effective_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///         amounts: CategoryAmounts::zero(),
///     },
/// ];
///
/// let intervals = resolve_timeline(&rows);
/// assert_eq!(intervals[0].valid_to, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(intervals[1].valid_to, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// ```
pub fn resolve_timeline(rows: &[BasicSalaryRow]) -> Vec<ResolvedSalaryInterval> {
    let mut newest_first: Vec<&BasicSalaryRow> = rows.iter().collect();
    newest_first.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));

    let mut intervals = Vec::with_capacity(rows.len());
    let mut next_effective: Option<NaiveDate> = None;

    for row in newest_first {
        let valid_to = match next_effective {
            None => end_of_year(row.effective_date),
            Some(next) => next.pred_opt().unwrap_or(next),
        };
        intervals.push(ResolvedSalaryInterval {
            row: row.clone(),
            valid_from: row.effective_date,
            valid_to,
        });
        next_effective = Some(row.effective_date);
    }

    intervals.sort_by(|a, b| a.row.effective_date.cmp(&b.row.effective_date));

    debug!(
        rows = rows.len(),
        first = ?intervals.first().map(|i| i.valid_from),
        last = ?intervals.last().map(|i| i.valid_to),
        "Resolved basic salary timeline"
    );

    intervals
}
