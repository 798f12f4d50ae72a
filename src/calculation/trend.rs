//! Month-over-month percentage changes.

use rust_decimal::Decimal;
use tracing::warn;

use super::rounding::percentage_change;
use crate::models::{MonthlyResult, PercentageDeltas};

/// Change from `previous` to `current`, or zero when `previous` is zero.
fn delta_or_zero(field: &str, result: &MonthlyResult, previous: Decimal, current: Decimal) -> Decimal {
    percentage_change(previous, current).unwrap_or_else(|| {
        warn!(
            month = %result.month.from,
            field,
            "Previous month amount is zero, percentage change set to 0"
        );
        Decimal::ZERO
    })
}

/// Fills in the percentage deltas of an ordered sequence of months.
///
/// The first month's deltas are zero. Every later month gets the change of
/// its gross total and of its basic salary against the month before it.
/// A zero previous amount yields a zero delta.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::with_percentage_deltas;
///
/// assert!(with_percentage_deltas(Vec::new()).is_empty());
/// ```
pub fn with_percentage_deltas(results: Vec<MonthlyResult>) -> Vec<MonthlyResult> {
    let mut previous: Option<(Decimal, Decimal)> = None;
    results
        .into_iter()
        .map(|mut result| {
            let deltas = match previous {
                None => PercentageDeltas::zero(),
                Some((prev_gross, prev_basic)) => PercentageDeltas {
                    gross_total: delta_or_zero("gross_total", &result, prev_gross, result.gross_total),
                    basic_salary: delta_or_zero(
                        "basic_salary",
                        &result,
                        prev_basic,
                        result.basic_salary,
                    ),
                },
            };
            previous = Some((result.gross_total, result.basic_salary));
            result.deltas = Some(deltas);
            result
        })
        .collect()
}
