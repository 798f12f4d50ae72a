//! Payroll report output.
//!
//! This module turns computed results into display records with every
//! amount rendered as a fixed-point string, and wraps them in a
//! [`PayrollReport`] envelope.

mod format;
mod records;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::calculation::{compute_sac, compute_series};
use crate::error::EngineResult;
use crate::models::{BasicSalaryRow, BonusEntry, EmployeeProfile, MonthWindow, Semester};

pub use format::{format_amount, format_currency_ars, format_percent};
pub use records::{BonusRecord, MonthlyRecord, PayrollReport, SacRecord};

/// Builds the payroll report for `months` of `year`.
///
/// The SAC is included only when the months form a complete semester.
///
/// # Errors
///
/// Returns `InvalidMonth` if any month is outside 1..=12.
///
/// # Examples
///
/// ```
/// use salary_engine::models::{
///     ActingCategory, Category, EmployeeProfile, PermanenceBracket, RiskAllowance, TitleTier,
/// };
/// use salary_engine::report::build_report;
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
/// let report = build_report(&profile, 2024, &[2, 3], &[], &[]).unwrap();
/// assert_eq!(report.months.len(), 2);
/// assert_eq!(report.months[0].net_pay, "0.00");
/// assert!(report.sac.is_none());
/// ```
pub fn build_report(
    profile: &EmployeeProfile,
    year: i32,
    months: &[u32],
    salary_rows: &[BasicSalaryRow],
    bonuses: &[BonusEntry],
) -> EngineResult<PayrollReport> {
    let windows = MonthWindow::for_months(year, months)?;
    let results = compute_series(profile, &windows, salary_rows, bonuses);

    let sac = Semester::of(&windows)
        .map(|_| compute_sac(profile, salary_rows, bonuses, &windows))
        .map(|sac| SacRecord::from(&sac));

    let report = PayrollReport {
        calculation_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year,
        months: results.iter().map(MonthlyRecord::from).collect(),
        sac,
    };

    info!(
        calculation_id = %report.calculation_id,
        months = report.months.len(),
        with_sac = report.sac.is_some(),
        "Built payroll report"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{ActingCategory, Category, CategoryAmounts, PermanenceBracket, RiskAllowance, TitleTier};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salary_rows() -> Vec<BasicSalaryRow> {
        vec![BasicSalaryRow {
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amounts: CategoryAmounts::new([
                dec("1054358"),
                dec("878633"),
                dec("731032"),
                dec("608023"),
                dec("506093"),
                dec("421738"),
                dec("351452"),
            ]),
        }]
    }

    fn bonuses() -> Vec<BonusEntry> {
        vec![BonusEntry {
            valid_from: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            valid_to: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            label: "Fixed sum".to_string(),
            is_remunerative: false,
            amounts: CategoryAmounts::new([dec("25000"); 7]),
        }]
    }

    fn create_test_profile() -> EmployeeProfile {
        EmployeeProfile {
            category: Category::Cat3,
            seniority_years: 0,
            title: TitleTier::Tgu,
            permanence: PermanenceBracket::UpTo2Years,
            acting_category: ActingCategory::None,
            union_member: true,
            dependents: 0,
            risk_allowance: RiskAllowance::None,
            overtime_hours_50: Decimal::ZERO,
            overtime_hours_100: Decimal::ZERO,
        }
    }

    #[test]
    fn test_report_for_semester_includes_sac() {
        let report = build_report(
            &create_test_profile(),
            2024,
            &[1, 2, 3, 4, 5, 6],
            &salary_rows(),
            &[],
        )
        .unwrap();

        assert_eq!(report.months.len(), 6);
        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
        let sac = report.sac.unwrap();
        assert_eq!(sac.semester, Some(Semester::First));
        assert_eq!(sac.gross, "486136.28");
        assert_eq!(sac.net, "398010.37");
    }

    #[test]
    fn test_report_months_are_fixed_point_strings() {
        let report =
            build_report(&create_test_profile(), 2024, &[1, 2], &salary_rows(), &bonuses()).unwrap();

        let january = &report.months[0];
        assert_eq!(january.month, "2024-01-01");
        assert!(!january.missing_salary);
        assert_eq!(january.basic_salary, "731032.00");
        assert_eq!(january.remunerative_gross, "972272.56");
        assert_eq!(january.gross_total_change, "0.00");
        assert!(january.bonuses.is_empty());

        let february = &report.months[1];
        assert_eq!(february.bonuses.len(), 1);
        assert_eq!(february.bonuses[0].amount, "25000.00");
        assert_eq!(february.bonuses[0].remunerative, "NO");
        assert_eq!(february.non_remunerative_gross, "25000.00");
        assert!(report.sac.is_none());
    }

    #[test]
    fn test_report_invalid_month() {
        let result = build_report(&create_test_profile(), 2024, &[0], &salary_rows(), &[]);
        assert!(matches!(result, Err(EngineError::InvalidMonth { month: 0 })));
    }

    #[test]
    fn test_report_serializes_without_sac() {
        let report = build_report(&create_test_profile(), 2024, &[3], &salary_rows(), &[]).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("sac").is_none());
        assert_eq!(json["months"][0]["net_pay"], report.months[0].net_pay);
        assert!(json["calculation_id"].is_string());
    }
}
