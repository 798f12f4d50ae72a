//! Semiannual supplementary payment (SAC).
//!
//! The SAC is half of the highest remunerative gross of a complete semester,
//! with the gross-based deductions applied to it and half the usual union
//! dues.

use rust_decimal::Decimal;
use tracing::info;

use super::deductions::{calculate_health_law, calculate_retirement, calculate_welfare_fund};
use super::pipeline::compute_month;
use super::ratios::UNION_DUES_RATIO;
use super::rounding::{round_money, sum_money};
use super::timeline::resolve_timeline;
use crate::models::{
    BasicSalaryRow, BonusEntry, EmployeeProfile, MonthWindow, MonthlyResult, SacResult, Semester,
};

const TWO: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Computes the SAC for a semester.
///
/// `months` must be exactly the six months of one semester of one year, in
/// any order; anything else yields [`SacResult::zero`]. When several months
/// share the highest remunerative gross, the earliest in `months` is used.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_sac;
/// use salary_engine::models::{
///     ActingCategory, Category, EmployeeProfile, MonthWindow, PermanenceBracket,
///     RiskAllowance, TitleTier,
/// };
/// use rust_decimal::Decimal;
///
/// let profile = EmployeeProfile {
///     category: Category::Cat3,
///     seniority_years: 0,
///     title: TitleTier::Primary,
///     permanence: PermanenceBracket::UpTo2Years,
///     acting_category: ActingCategory::None,
///     union_member: false,
///     dependents: 0,
///     risk_allowance: RiskAllowance::None,
///     overtime_hours_50: Decimal::ZERO,
///     overtime_hours_100: Decimal::ZERO,
/// };
///
/// // Five months are not a semester.
/// let months = MonthWindow::for_months(2024, &[1, 2, 3, 4, 5]).unwrap();
/// assert!(compute_sac(&profile, &[], &[], &months).is_zero());
/// ```
pub fn compute_sac(
    profile: &EmployeeProfile,
    salary_rows: &[BasicSalaryRow],
    bonuses: &[BonusEntry],
    months: &[MonthWindow],
) -> SacResult {
    let Some(semester) = Semester::of(months) else {
        info!(months = months.len(), "Months do not form a complete semester, SAC is zero");
        return SacResult::zero();
    };

    let intervals = resolve_timeline(salary_rows);
    let best = months
        .iter()
        .map(|month| compute_month(profile, month, &intervals, bonuses))
        .reduce(|best, current| {
            if current.remunerative_gross > best.remunerative_gross {
                current
            } else {
                best
            }
        });
    let Some(best) = best else {
        return SacResult::zero();
    };

    let sac = sac_from_best_month(profile, semester, &best);
    info!(
        semester = ?semester,
        best_month = %best.month.from,
        gross = %sac.gross,
        net = %sac.net,
        "Computed SAC"
    );
    sac
}

fn sac_from_best_month(profile: &EmployeeProfile, semester: Semester, best: &MonthlyResult) -> SacResult {
    let gross = round_money(best.remunerative_gross / TWO);
    let retirement = calculate_retirement(gross);
    let health_law = calculate_health_law(gross);
    let welfare_fund = calculate_welfare_fund(gross);
    let union_dues = if profile.union_member {
        round_money(best.basic_salary * UNION_DUES_RATIO / TWO)
    } else {
        Decimal::ZERO
    };
    let total_deductions = sum_money([retirement, health_law, welfare_fund, union_dues]);

    SacResult {
        semester: Some(semester),
        gross,
        retirement,
        health_law,
        welfare_fund,
        union_dues,
        total_deductions,
        net: round_money(gross - total_deductions),
    }
}
